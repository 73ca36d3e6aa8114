mod error;
mod pattern_string;
mod regexp;

pub use error::{GeneratorError, GeneratorResult};
pub use pattern_string::generate_pattern_string;
pub use regexp::{NameList, generate_regex};
