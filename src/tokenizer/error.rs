use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupErrorReason {
    NonAscii,
    LeadingQuestionMark,
    NestedGroupNotNonCapturing,
    Unterminated,
    UnterminatedEscape,
}

impl fmt::Display for GroupErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NonAscii => "contains a non-ASCII code point",
            Self::LeadingQuestionMark => "starts with '?'",
            Self::NestedGroupNotNonCapturing => "opens a nested group not followed by '?'",
            Self::Unterminated => "is missing its closing ')'",
            Self::UnterminatedEscape => "ends with a lone '\\'",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    #[error("trailing '\\' at index {index} has nothing to escape")]
    UnterminatedEscape { index: usize },
    #[error("':' at index {index} is not followed by a valid name")]
    InvalidNameSyntax { index: usize },
    #[error("regexp group opened at index {index} {reason}")]
    UnterminatedOrInvalidGroup {
        index: usize,
        reason: GroupErrorReason,
    },
    #[error("regexp group opened at index {index} is empty")]
    EmptyGroupBody { index: usize },
}

impl TokenizerError {
    pub fn index(&self) -> usize {
        match self {
            Self::UnterminatedEscape { index }
            | Self::InvalidNameSyntax { index }
            | Self::UnterminatedOrInvalidGroup { index, .. }
            | Self::EmptyGroupBody { index } => *index,
        }
    }
}

pub type TokenizerResult<T> = Result<T, TokenizerError>;
