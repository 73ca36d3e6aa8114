mod error;
mod lexer;
mod token;

pub use error::{GroupErrorReason, TokenizerError, TokenizerResult};
pub use lexer::{tokenize, tokenize_str};
pub use token::{Token, TokenKind, TokenizePolicy, is_valid_name_code_point};
