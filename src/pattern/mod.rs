mod error;
mod parser;
mod part;

pub use error::{PatternError, PatternResult};
pub use parser::parse_pattern;
pub use part::{FULL_WILDCARD_REGEXP, Modifier, Part, PartName, PartType};
