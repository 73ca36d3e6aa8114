use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("'{input}' contains a non-ASCII code point at index {index}")]
    NonAsciiInput { input: String, index: usize },
}

pub type EscapeResult<T> = Result<T, EscapeError>;
