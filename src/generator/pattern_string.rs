use super::{GeneratorError, GeneratorResult};
use crate::escape::escape_pattern_string;
use crate::options::CompileOptions;
use crate::pattern::{FULL_WILDCARD_REGEXP, Modifier, Part, PartType};
use crate::tokenizer::is_valid_name_code_point;

/// Serializes `parts` back into pattern syntax. Re-parsing the output with the
/// same options yields an equivalent part list.
#[tracing::instrument(level = "trace", skip(parts, options), fields(parts = parts.len() as u64))]
pub fn generate_pattern_string(
    parts: &[Part],
    options: &CompileOptions,
) -> GeneratorResult<String> {
    let mut result = String::new();

    for (position, part) in parts.iter().enumerate() {
        let previous = position.checked_sub(1).and_then(|i| parts.get(i));
        let next = parts.get(position + 1);

        if part.kind == PartType::FixedText {
            if part.modifier == Modifier::None {
                result.push_str(&escape_pattern_string(&part.value));
            } else {
                result.push('{');
                result.push_str(&escape_pattern_string(&part.value));
                result.push('}');
                result.push_str(part.modifier.as_str());
            }
            continue;
        }

        let name = part
            .name
            .as_ref()
            .ok_or(GeneratorError::MissingCaptureName { position })?;
        let custom_name = name.is_custom();
        let needs_grouping = needs_grouping(part, previous, next, options);

        if needs_grouping {
            result.push('{');
        }

        result.push_str(&escape_pattern_string(&part.prefix));

        if custom_name {
            result.push(':');
            result.push_str(&name.to_string());
        }

        match part.kind {
            PartType::Regexp => {
                result.push('(');
                result.push_str(&part.value);
                result.push(')');
            }
            PartType::SegmentWildcard if !custom_name => {
                result.push('(');
                result.push_str(&options.segment_wildcard_regexp()?);
                result.push(')');
            }
            PartType::FullWildcard => {
                // `*` directly after an unmodified capture would read as its modifier
                let bare_asterisk = !custom_name
                    && (previous.is_none_or(|p| p.is_fixed_text() || p.modifier != Modifier::None)
                        || needs_grouping
                        || !part.prefix.is_empty());
                if bare_asterisk {
                    result.push('*');
                } else {
                    result.push('(');
                    result.push_str(FULL_WILDCARD_REGEXP);
                    result.push(')');
                }
            }
            _ => {}
        }

        if part.kind == PartType::SegmentWildcard
            && custom_name
            && part
                .suffix
                .chars()
                .next()
                .is_some_and(|c| is_valid_name_code_point(c, false))
        {
            result.push('\\');
        }

        result.push_str(&escape_pattern_string(&part.suffix));

        if needs_grouping {
            result.push('}');
        }

        result.push_str(part.modifier.as_str());
    }

    Ok(result)
}

fn needs_grouping(
    part: &Part,
    previous: Option<&Part>,
    next: Option<&Part>,
    options: &CompileOptions,
) -> bool {
    if !part.suffix.is_empty() || (!part.prefix.is_empty() && !options.is_prefix(&part.prefix)) {
        return true;
    }

    let custom_name = part.name.as_ref().is_some_and(|name| name.is_custom());

    // a bare `:name` would swallow following name code points or an unnamed group
    if custom_name
        && part.kind == PartType::SegmentWildcard
        && part.modifier == Modifier::None
        && let Some(next) = next
        && next.prefix.is_empty()
        && next.suffix.is_empty()
    {
        let merges = if next.is_fixed_text() {
            next.value
                .chars()
                .next()
                .is_some_and(|c| is_valid_name_code_point(c, false))
        } else {
            next.name.as_ref().is_some_and(|name| !name.is_custom())
        };
        if merges {
            return true;
        }
    }

    // fixed text ending in the prefix code point would be re-read as this part's prefix
    part.prefix.is_empty()
        && previous.is_some_and(|p| p.is_fixed_text() && options.ends_with_prefix(&p.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{PartName, parse_pattern};

    fn canonical(input: &str) -> String {
        let options = CompileOptions::pathname();
        let parts = parse_pattern(input, &options, |s: &str| s.to_string()).unwrap();
        generate_pattern_string(&parts, &options).unwrap()
    }

    #[test]
    fn keeps_simple_patterns_unchanged() {
        for input in ["/users/:id", "*", "/foo/*", ":id(\\d+)", "/:path*", "/(\\d+)?"] {
            assert_eq!(canonical(input), input);
        }
    }

    #[test]
    fn re_escapes_fixed_text() {
        assert_eq!(canonical("a\\{b"), "a\\{b");
        assert_eq!(canonical("/\\:x"), "/\\:x");
    }

    #[test]
    fn drops_redundant_braces() {
        assert_eq!(canonical("{/:id}"), "/:id");
        assert_eq!(canonical("/a{bc}"), "/abc");
    }

    #[test]
    fn groups_parts_with_suffix_or_foreign_prefix() {
        assert_eq!(canonical("{a:foo(bar)b}?"), "{a:foo(bar)b}?");
        assert_eq!(canonical("{-:id}"), "{-:id}");
    }

    #[test]
    fn groups_name_followed_by_name_code_point() {
        assert_eq!(canonical("{:foo}bar"), "{:foo}bar");
        assert_eq!(canonical("{:foo}(\\d+)"), "{:foo}(\\d+)");
    }

    #[test]
    fn groups_part_after_fixed_text_ending_in_prefix() {
        assert_eq!(canonical("/{:id}"), "/{:id}");
        assert_eq!(canonical("/{*}"), "/{*}");
    }

    #[test]
    fn asterisk_after_capture_renders_as_group() {
        assert_eq!(canonical("{:foo}(.*)"), "{:foo}(.*)");
        assert_eq!(canonical(":foo?*"), ":foo?*");
    }

    #[test]
    fn escapes_suffix_starting_with_name_code_point() {
        assert_eq!(canonical("{:foo\\bar}"), "{:foo\\bar}");
    }

    #[test]
    fn unnamed_segment_wildcard_renders_its_expression() {
        let options = CompileOptions::pathname();
        let parts = [Part::capture(
            PartType::SegmentWildcard,
            String::new(),
            Modifier::None,
            PartName::Index(0),
            "/".into(),
            String::new(),
        )];
        assert_eq!(
            generate_pattern_string(&parts, &options).unwrap(),
            "/([^\\/]+?)"
        );
    }
}
