use serde::Serialize;

use crate::errors::UrlPatternResult;
use crate::generator::{NameList, generate_pattern_string, generate_regex};
use crate::options::CompileOptions;
use crate::pattern::parse_pattern;

/// Pattern used for a component whose pattern was not supplied.
pub const DEFAULT_COMPONENT_PATTERN: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledComponent {
    pub regex_source: String,
    pub names: NameList,
    pub canonical_pattern: String,
}

#[tracing::instrument(level = "trace", skip(encode, options), fields(pattern = %input))]
pub fn compile_component<F>(
    input: &str,
    encode: F,
    options: &CompileOptions,
) -> UrlPatternResult<CompiledComponent>
where
    F: Fn(&str) -> String,
{
    options.validate()?;

    let parts = parse_pattern(input, options, encode)?;
    let (regex_source, names) = generate_regex(&parts, options)?;
    let canonical_pattern = generate_pattern_string(&parts, options)?;

    tracing::event!(
        tracing::Level::TRACE,
        operation = "compile_component",
        parts = parts.len() as u64,
        names = names.len() as u64,
        regex = %regex_source
    );

    Ok(CompiledComponent {
        regex_source,
        names,
        canonical_pattern,
    })
}

pub fn compile_component_or_wildcard<F>(
    input: Option<&str>,
    encode: F,
    options: &CompileOptions,
) -> UrlPatternResult<CompiledComponent>
where
    F: Fn(&str) -> String,
{
    compile_component(
        input.unwrap_or(DEFAULT_COMPONENT_PATTERN),
        encode,
        options,
    )
}

/// Encoding callback for components whose text needs no normalization.
#[inline]
pub fn encode_identity(input: &str) -> String {
    input.to_string()
}
