mod error;

pub use error::{EscapeError, EscapeResult};

const REGEXP_SYMBOLS: &[char] = &[
    '.', '+', '*', '?', '^', '$', '{', '}', '(', ')', '[', ']', '|', '/', '\\',
];
const PATTERN_SYMBOLS: &[char] = &['+', '*', '?', ':', '{', '}', '(', ')', '\\'];

/// Escapes regex metacharacters so `input` matches literally. Input must be
/// ASCII; encoding callbacks are expected to have percent-encoded the rest.
pub fn escape_regexp_string(input: &str) -> EscapeResult<String> {
    if let Some(index) = input.chars().position(|c| !c.is_ascii()) {
        return Err(EscapeError::NonAsciiInput {
            input: input.to_string(),
            index,
        });
    }
    Ok(escape_with(input, REGEXP_SYMBOLS))
}

/// Escapes pattern syntax so `input` re-parses as fixed text.
pub fn escape_pattern_string(input: &str) -> String {
    escape_with(input, PATTERN_SYMBOLS)
}

fn escape_with(input: &str, symbols: &[char]) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if symbols.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_regexp_metacharacters() {
        assert_eq!(escape_regexp_string(".").unwrap(), "\\.");
        assert_eq!(
            escape_regexp_string("/a.b+c*[d]").unwrap(),
            "\\/a\\.b\\+c\\*\\[d\\]"
        );
        assert_eq!(escape_regexp_string("plain-text_1").unwrap(), "plain-text_1");
    }

    #[test]
    fn regexp_escaping_requires_ascii() {
        let err = escape_regexp_string("caf\u{e9}").unwrap_err();
        assert_eq!(
            err,
            EscapeError::NonAsciiInput {
                input: "caf\u{e9}".to_string(),
                index: 3
            }
        );
    }

    #[test]
    fn escapes_pattern_syntax_only() {
        assert_eq!(escape_pattern_string("{"), "\\{");
        assert_eq!(escape_pattern_string("/a:b(c)"), "/a\\:b\\(c\\)");
        assert_eq!(escape_pattern_string("a.b$"), "a.b$");
    }

    #[test]
    fn pattern_escaping_passes_unicode_through() {
        assert_eq!(escape_pattern_string("caf\u{e9}*"), "caf\u{e9}\\*");
    }
}
