use bunner_urlpattern_rs::tokenizer::{
    Token, TokenKind, TokenizePolicy, TokenizerError, tokenize, tokenize_str,
};

#[test]
fn tokenize_when_constructor_string_then_lenient_marks_scheme_colon() {
    let tokens = tokenize_str("https://*.example.com", TokenizePolicy::Lenient)
        .expect("lenient tokenizing never fails");

    assert_eq!(tokens[5], Token::new(TokenKind::InvalidChar, 5, ":".into()));
    assert_eq!(tokens[8], Token::new(TokenKind::Asterisk, 8, "*".into()));
    let end = tokens.last().expect("end token present");
    assert_eq!(end.kind, TokenKind::End);
    assert_eq!(end.index, 21);
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::End).count(),
        1
    );
}

#[test]
fn tokenize_when_constructor_string_then_strict_rejects_it() {
    let err = tokenize_str("https://*.example.com", TokenizePolicy::Strict)
        .expect_err("strict tokenizing should fail");
    assert_eq!(err, TokenizerError::InvalidNameSyntax { index: 5 });
}

#[test]
fn tokenize_indexes_are_code_point_offsets() {
    let input: Vec<char> = "/\u{e9}t\u{e9}/:n".chars().collect();
    let tokens = tokenize(&input, TokenizePolicy::Strict).expect("input should tokenize");

    let indexes: Vec<usize> = tokens.iter().map(|t| t.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5, 7]);
    assert_eq!(tokens[5], Token::new(TokenKind::Name, 5, "n".into()));
}

#[test]
fn tokenize_when_lenient_group_error_then_resumes_after_paren() {
    let tokens = tokenize_str("/(a(b))", TokenizePolicy::Lenient).expect("lenient");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Char,
            TokenKind::InvalidChar,
            TokenKind::Char,
            TokenKind::Regexp,
            TokenKind::Char,
            TokenKind::End,
        ]
    );
    assert_eq!(tokens[3].value, "b");
}

#[test]
fn tokens_serialize_with_kebab_case_kinds() {
    let tokens = tokenize_str("\\+", TokenizePolicy::Strict).expect("escape should tokenize");
    let value = serde_json::to_value(&tokens).expect("tokens serialize");
    assert_eq!(
        value,
        serde_json::json!([
            { "kind": "escaped-char", "index": 0, "value": "+" },
            { "kind": "end", "index": 2, "value": "" },
        ])
    );
}
