use crate::escape::{EscapeResult, escape_regexp_string};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompileOptions {
    pub delimiter_code_point: Option<char>,
    pub prefix_code_point: Option<char>,
    pub validate_regex: bool,
}

impl CompileOptions {
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::default()
    }

    pub fn hostname() -> Self {
        Self {
            delimiter_code_point: Some('.'),
            prefix_code_point: None,
            validate_regex: false,
        }
    }

    pub fn pathname() -> Self {
        Self {
            delimiter_code_point: Some('/'),
            prefix_code_point: Some('/'),
            validate_regex: false,
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(found) = self.delimiter_code_point.filter(|c| !c.is_ascii()) {
            return Err(OptionsError::NonAsciiDelimiter { found });
        }
        if let Some(found) = self.prefix_code_point.filter(|c| !c.is_ascii()) {
            return Err(OptionsError::NonAsciiPrefix { found });
        }
        Ok(())
    }

    /// `[^<delimiter>]+?`, the expression behind `:name` and unnamed segment captures.
    pub fn segment_wildcard_regexp(&self) -> EscapeResult<String> {
        let delimiter = self
            .delimiter_code_point
            .map(String::from)
            .unwrap_or_default();
        Ok(format!("[^{}]+?", escape_regexp_string(&delimiter)?))
    }

    pub(crate) fn is_prefix(&self, value: &str) -> bool {
        let mut chars = value.chars();
        match (self.prefix_code_point, chars.next(), chars.next()) {
            (Some(prefix), Some(first), None) => prefix == first,
            _ => false,
        }
    }

    pub(crate) fn ends_with_prefix(&self, value: &str) -> bool {
        self.prefix_code_point
            .is_some_and(|prefix| value.ends_with(prefix))
    }
}

#[derive(Debug, Default, Clone)]
pub struct CompileOptionsBuilder {
    options: CompileOptions,
}

impl CompileOptionsBuilder {
    pub fn delimiter(mut self, value: char) -> Self {
        self.options.delimiter_code_point = Some(value);
        self
    }

    pub fn prefix(mut self, value: char) -> Self {
        self.options.prefix_code_point = Some(value);
        self
    }

    pub fn validate_regex(mut self, value: bool) -> Self {
        self.options.validate_regex = value;
        self
    }

    pub fn build(self) -> Result<CompileOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("delimiter code point '{found}' must be ASCII")]
    NonAsciiDelimiter { found: char },
    #[error("prefix code point '{found}' must be ASCII")]
    NonAsciiPrefix { found: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_component_conventions() {
        assert_eq!(CompileOptions::default().delimiter_code_point, None);
        assert_eq!(CompileOptions::hostname().delimiter_code_point, Some('.'));
        assert_eq!(CompileOptions::hostname().prefix_code_point, None);
        assert_eq!(CompileOptions::pathname().prefix_code_point, Some('/'));
    }

    #[test]
    fn builder_rejects_non_ascii_code_points() {
        let err = CompileOptions::builder().delimiter('\u{b7}').build().unwrap_err();
        assert_eq!(err, OptionsError::NonAsciiDelimiter { found: '\u{b7}' });

        let err = CompileOptions::builder().prefix('\u{2044}').build().unwrap_err();
        assert_eq!(err, OptionsError::NonAsciiPrefix { found: '\u{2044}' });
    }

    #[test]
    fn segment_wildcard_escapes_delimiter() {
        assert_eq!(
            CompileOptions::pathname().segment_wildcard_regexp().unwrap(),
            "[^\\/]+?"
        );
        assert_eq!(
            CompileOptions::hostname().segment_wildcard_regexp().unwrap(),
            "[^\\.]+?"
        );
        assert_eq!(
            CompileOptions::default().segment_wildcard_regexp().unwrap(),
            "[^]+?"
        );
    }

    #[test]
    fn prefix_checks_single_code_point() {
        let options = CompileOptions::pathname();
        assert!(options.is_prefix("/"));
        assert!(!options.is_prefix("//"));
        assert!(!options.is_prefix(""));
        assert!(options.ends_with_prefix("/foo/"));
        assert!(!CompileOptions::default().ends_with_prefix("/foo/"));
    }

    #[test]
    fn options_deserialize_from_json() {
        let options: CompileOptions = serde_json::from_str(
            r#"{"delimiter_code_point":"/","prefix_code_point":"/","validate_regex":true}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            CompileOptions::builder()
                .delimiter('/')
                .prefix('/')
                .validate_regex(true)
                .build()
                .unwrap()
        );
    }
}
