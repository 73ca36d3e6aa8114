use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Asterisk,
    OtherModifier,
    EscapedChar,
    Open,
    Close,
    Name,
    Regexp,
    Char,
    InvalidChar,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TokenizePolicy {
    #[default]
    Strict,
    Lenient,
}

/// A lexical unit of a pattern. `index` is the code point offset where the
/// token starts in the tokenized input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub index: usize,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, index: usize, value: String) -> Self {
        Self { kind, index, value }
    }

    pub fn is_modifier(&self) -> bool {
        matches!(self.kind, TokenKind::OtherModifier | TokenKind::Asterisk)
    }
}

#[inline]
pub fn is_valid_name_code_point(code_point: char, first: bool) -> bool {
    if code_point == '$' || code_point == '_' {
        return true;
    }
    if first {
        code_point.is_alphabetic()
    } else {
        code_point == '\u{200C}' || code_point == '\u{200D}' || code_point.is_alphanumeric()
    }
}
