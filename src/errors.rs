use crate::escape::EscapeError;
use crate::generator::GeneratorError;
use crate::options::OptionsError;
use crate::pattern::PatternError;
use crate::tokenizer::TokenizerError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    InvalidOptions,
    UnterminatedEscape,
    InvalidNameSyntax,
    UnterminatedOrInvalidGroup,
    EmptyGroupBody,
    DuplicateName,
    MalformedBrace,
    UnexpectedToken,
    InvalidRepeatingPartDelimiters,
    MissingCaptureName,
    NonAsciiInput,
    InvalidRegex,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlPatternError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl UrlPatternError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Options(_) => ErrorKind::InvalidOptions,
            Self::Pattern(err) => match err {
                PatternError::Tokenizer(err) => match err {
                    TokenizerError::UnterminatedEscape { .. } => ErrorKind::UnterminatedEscape,
                    TokenizerError::InvalidNameSyntax { .. } => ErrorKind::InvalidNameSyntax,
                    TokenizerError::UnterminatedOrInvalidGroup { .. } => {
                        ErrorKind::UnterminatedOrInvalidGroup
                    }
                    TokenizerError::EmptyGroupBody { .. } => ErrorKind::EmptyGroupBody,
                },
                PatternError::Escape(EscapeError::NonAsciiInput { .. }) => ErrorKind::NonAsciiInput,
                PatternError::DuplicateName { .. } => ErrorKind::DuplicateName,
                PatternError::MalformedBrace { .. } => ErrorKind::MalformedBrace,
                PatternError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            },
            Self::Generator(err) => match err {
                GeneratorError::Escape(EscapeError::NonAsciiInput { .. }) => {
                    ErrorKind::NonAsciiInput
                }
                GeneratorError::InvalidRepeatingPartDelimiters { .. } => {
                    ErrorKind::InvalidRepeatingPartDelimiters
                }
                GeneratorError::MissingCaptureName { .. } => ErrorKind::MissingCaptureName,
                GeneratorError::InvalidRegex { .. } => ErrorKind::InvalidRegex,
            },
        }
    }

    /// Code point offset into the pattern input, when the failure has one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Pattern(err) => err.index(),
            _ => None,
        }
    }
}

pub type UrlPatternResult<T> = Result<T, UrlPatternError>;
