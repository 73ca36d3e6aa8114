//! Compiler for the URL pattern mini-language (`/users/:id/*`, `{/:lang}?`,
//! `:id(\d+)`). One call turns the pattern of a single URL component into
//! an anchored regular expression source, the ordered capture names and a
//! canonical pattern string.
//!
//! ```
//! use bunner_urlpattern_rs::{CompileOptions, PartName, compile_component, encode_identity};
//!
//! let compiled =
//!     compile_component("/users/:id", encode_identity, &CompileOptions::pathname()).unwrap();
//! assert_eq!(compiled.regex_source, r"^\/users(?:\/([^\/]+?))$");
//! assert_eq!(compiled.names.as_slice(), &[PartName::from("id")]);
//! assert_eq!(compiled.canonical_pattern, "/users/:id");
//! ```

mod compiler;
pub mod errors;
pub mod escape;
pub mod generator;
mod options;
pub mod pattern;
pub mod tokenizer;

pub use compiler::{
    CompiledComponent, DEFAULT_COMPONENT_PATTERN, compile_component,
    compile_component_or_wildcard, encode_identity,
};
pub use errors::{ErrorKind, UrlPatternError, UrlPatternResult};
pub use generator::NameList;
pub use options::{CompileOptions, CompileOptionsBuilder, OptionsError};
pub use pattern::{Modifier, Part, PartName, PartType};
