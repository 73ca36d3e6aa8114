use bunner_urlpattern_rs::generator::generate_pattern_string;
use bunner_urlpattern_rs::pattern::parse_pattern;
use bunner_urlpattern_rs::{CompileOptions, Part, PartType, encode_identity};
use std::collections::HashSet;

const PATHNAME_PATTERNS: &[&str] = &[
    "",
    "/",
    "*",
    "/users/:id",
    "/users/:id/posts/:post_id",
    "/files/*",
    "/:lang?/docs",
    "{/:lang}?/docs",
    "/:id(\\d+)",
    "/product{s}?",
    "/api/:version(v\\d+)/*",
    "{:foo}bar",
    "{a:foo(bar)b}?",
    "/{:id}",
    "/{*}",
    ":foo?*",
    "{:foo\\bar}",
    "{:foo}(.*)",
    "/(\\d+)/:name+",
    "a\\{b",
    "/books/:id\\.json",
    "/:a/:b*/c",
    "{-:x-}+",
    "/(foo|bar)/:rest(.*)",
    "1{}+1",
    "/a{}?/:id",
];

fn parse(input: &str, options: &CompileOptions) -> Vec<Part> {
    parse_pattern(input, options, encode_identity)
        .unwrap_or_else(|err| panic!("{input:?} should parse: {err}"))
}

#[test]
fn canonical_pattern_reparses_to_equivalent_parts() {
    let options = CompileOptions::pathname();
    for input in PATHNAME_PATTERNS {
        let parts = parse(input, &options);
        let canonical = generate_pattern_string(&parts, &options)
            .unwrap_or_else(|err| panic!("{input:?} should serialize: {err}"));
        let reparsed = parse(&canonical, &options);
        assert_eq!(reparsed, parts, "{input:?} -> {canonical:?}");
    }
}

#[test]
fn canonical_pattern_is_a_fixed_point() {
    let options = CompileOptions::pathname();
    for input in PATHNAME_PATTERNS {
        let once = generate_pattern_string(&parse(input, &options), &options).unwrap();
        let twice = generate_pattern_string(&parse(&once, &options), &options).unwrap();
        assert_eq!(once, twice, "{input:?}");
    }
}

#[test]
fn hostname_patterns_round_trip() {
    let options = CompileOptions::hostname();
    for input in ["*.example.com", ":sub.example.com", "{:a}b.com", "api{-v2}?.test"] {
        let parts = parse(input, &options);
        let canonical = generate_pattern_string(&parts, &options).unwrap();
        assert_eq!(parse(&canonical, &options), parts, "{input:?} -> {canonical:?}");
    }
}

#[test]
fn parsed_names_are_unique() {
    let options = CompileOptions::pathname();
    for input in PATHNAME_PATTERNS {
        let parts = parse(input, &options);
        let mut seen = HashSet::new();
        for part in parts.iter().filter(|p| p.kind != PartType::FixedText) {
            let name = part.name.clone().expect("captures are always named");
            assert!(seen.insert(name), "{input:?}");
        }
    }
}
