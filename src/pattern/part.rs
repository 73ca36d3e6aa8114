use serde::Serialize;
use std::fmt;

pub const FULL_WILDCARD_REGEXP: &str = ".*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartType {
    FixedText,
    SegmentWildcard,
    FullWildcard,
    Regexp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    #[default]
    None,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Modifier {
    pub fn from_token_value(value: &str) -> Self {
        match value {
            "?" => Self::Optional,
            "*" => Self::ZeroOrMore,
            "+" => Self::OneOrMore,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a capturing part: the `:name` text, or the ordinal handed out to
/// unnamed captures in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PartName {
    Named(String),
    Index(usize),
}

impl PartName {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PartName {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

impl From<usize> for PartName {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub kind: PartType,
    pub value: String,
    pub modifier: Modifier,
    pub name: Option<PartName>,
    pub prefix: String,
    pub suffix: String,
}

impl Part {
    pub fn fixed_text(value: String, modifier: Modifier) -> Self {
        Self {
            kind: PartType::FixedText,
            value,
            modifier,
            name: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn capture(
        kind: PartType,
        value: String,
        modifier: Modifier,
        name: PartName,
        prefix: String,
        suffix: String,
    ) -> Self {
        Self {
            kind,
            value,
            modifier,
            name: Some(name),
            prefix,
            suffix,
        }
    }

    pub fn is_fixed_text(&self) -> bool {
        self.kind == PartType::FixedText
    }
}
