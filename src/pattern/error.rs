use crate::escape::EscapeError;
use crate::tokenizer::{TokenKind, TokenizerError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error(transparent)]
    Escape(#[from] EscapeError),
    #[error("duplicate name '{name}' at index {index}")]
    DuplicateName { name: String, index: usize },
    #[error("'{{' at index {index} has no matching '}}'")]
    MalformedBrace { index: usize },
    #[error("expected {expected:?} token but found {found:?} at index {index}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        index: usize,
    },
}

impl PatternError {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Tokenizer(err) => Some(err.index()),
            Self::Escape(_) => None,
            Self::DuplicateName { index, .. }
            | Self::MalformedBrace { index }
            | Self::UnexpectedToken { index, .. } => Some(*index),
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
