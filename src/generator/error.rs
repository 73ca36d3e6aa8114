use crate::escape::EscapeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Escape(#[from] EscapeError),
    #[error("repeating part '{name}' needs a non-empty prefix or suffix")]
    InvalidRepeatingPartDelimiters { name: String },
    #[error("capturing part at position {position} has no name")]
    MissingCaptureName { position: usize },
    #[error("generated expression '{expression}' is not a valid regex: {error}")]
    InvalidRegex { expression: String, error: String },
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
