use regex::Regex;
use smallvec::SmallVec;

use super::{GeneratorError, GeneratorResult};
use crate::escape::escape_regexp_string;
use crate::options::CompileOptions;
use crate::pattern::{FULL_WILDCARD_REGEXP, Modifier, Part, PartName, PartType};

pub type NameList = SmallVec<[PartName; 4]>;

/// Builds the anchored expression for `parts` together with the capture names,
/// one per non-fixed part in group order.
#[tracing::instrument(level = "trace", skip(parts, options), fields(parts = parts.len() as u64))]
pub fn generate_regex(
    parts: &[Part],
    options: &CompileOptions,
) -> GeneratorResult<(String, NameList)> {
    let segment_wildcard = options.segment_wildcard_regexp()?;
    let mut result = String::from("^");
    let mut names = NameList::new();

    for (position, part) in parts.iter().enumerate() {
        if part.kind == PartType::FixedText {
            let escaped = escape_regexp_string(&part.value)?;
            if part.modifier == Modifier::None {
                result.push_str(&escaped);
            } else {
                result.push_str(&format!("(?:{escaped}){}", part.modifier));
            }
            continue;
        }

        let name = part
            .name
            .clone()
            .ok_or(GeneratorError::MissingCaptureName { position })?;

        let inner = match part.kind {
            PartType::SegmentWildcard => segment_wildcard.as_str(),
            PartType::FullWildcard => FULL_WILDCARD_REGEXP,
            _ => part.value.as_str(),
        };
        let prefix = escape_regexp_string(&part.prefix)?;
        let suffix = escape_regexp_string(&part.suffix)?;
        let modifier = part.modifier;

        if modifier.is_repeating() {
            if prefix.is_empty() && suffix.is_empty() {
                return Err(GeneratorError::InvalidRepeatingPartDelimiters {
                    name: name.to_string(),
                });
            }
            // delimiters between repetitions are matched once, inside the capture
            result.push_str(&format!(
                "(?:{prefix}((?:{inner})(?:{suffix}{prefix}(?:{inner}))*){suffix})"
            ));
            if modifier == Modifier::ZeroOrMore {
                result.push('?');
            }
        } else if prefix.is_empty() && suffix.is_empty() {
            result.push_str(&format!("({inner}){modifier}"));
        } else {
            result.push_str(&format!("(?:{prefix}({inner}){suffix}){modifier}"));
        }

        names.push(name);
    }

    result.push('$');

    if options.validate_regex {
        validate_expression(&result)?;
    }

    Ok((result, names))
}

const LOOKAROUND_OPENERS: [&[char]; 4] = [
    &['?', '='],
    &['?', '!'],
    &['?', '<', '='],
    &['?', '<', '!'],
];

fn validate_expression(expression: &str) -> GeneratorResult<()> {
    let Some(source) = to_regex_syntax(expression) else {
        tracing::event!(
            tracing::Level::DEBUG,
            operation = "generate_regex",
            regex = %expression,
            "look-around left unvalidated"
        );
        return Ok(());
    };

    Regex::new(&source)
        .map(|_| ())
        .map_err(|err| GeneratorError::InvalidRegex {
            expression: expression.to_string(),
            error: err.to_string(),
        })
}

/// Rewrites ECMAScript-only forms into `regex` syntax. Returns `None` when the
/// expression contains look-around, which `regex` cannot parse.
fn to_regex_syntax(expression: &str) -> Option<String> {
    let chars: Vec<char> = expression.chars().collect();
    let mut out = String::with_capacity(expression.len());
    let mut in_class = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let rest = &chars[i + 1..];
        match c {
            '\\' => {
                out.push(c);
                if let Some(&escaped) = rest.first() {
                    out.push(escaped);
                }
                i += 2;
                continue;
            }
            // `[^]` matches any code point, line terminators included
            '[' if !in_class && rest.starts_with(&['^', ']']) => {
                out.push_str("(?s:.)");
                i += 3;
                continue;
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class
                && LOOKAROUND_OPENERS
                    .iter()
                    .any(|opener| rest.starts_with(opener)) =>
            {
                return None;
            }
            _ => {}
        }
        out.push(c);
        i += 1;
    }

    Some(out)
}
