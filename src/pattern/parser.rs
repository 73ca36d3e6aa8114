use hashbrown::HashSet;

use super::part::{FULL_WILDCARD_REGEXP, Modifier, Part, PartName, PartType};
use super::{PatternError, PatternResult};
use crate::options::CompileOptions;
use crate::tokenizer::{Token, TokenKind, TokenizePolicy, tokenize};

#[tracing::instrument(level = "trace", skip(options, encode), fields(pattern = %input))]
pub fn parse_pattern<F>(
    input: &str,
    options: &CompileOptions,
    encode: F,
) -> PatternResult<Vec<Part>>
where
    F: Fn(&str) -> String,
{
    let code_points: Vec<char> = input.chars().collect();
    let tokens = tokenize(&code_points, TokenizePolicy::Strict)?;
    let segment_wildcard_regexp = options.segment_wildcard_regexp()?;

    PatternParser::new(tokens, options, encode, segment_wildcard_regexp).parse()
}

struct PatternParser<'a, F> {
    tokens: Vec<Token>,
    options: &'a CompileOptions,
    encode: F,
    segment_wildcard_regexp: String,
    parts: Vec<Part>,
    names: HashSet<PartName>,
    pending_fixed_value: String,
    index: usize,
    next_numeric_name: usize,
}

impl<'a, F> PatternParser<'a, F>
where
    F: Fn(&str) -> String,
{
    fn new(
        tokens: Vec<Token>,
        options: &'a CompileOptions,
        encode: F,
        segment_wildcard_regexp: String,
    ) -> Self {
        Self {
            tokens,
            options,
            encode,
            segment_wildcard_regexp,
            parts: Vec::new(),
            names: HashSet::new(),
            pending_fixed_value: String::new(),
            index: 0,
            next_numeric_name: 0,
        }
    }

    fn parse(mut self) -> PatternResult<Vec<Part>> {
        while self.index < self.tokens.len() {
            let char_token = self.try_consume(TokenKind::Char);
            let name_token = self.try_consume(TokenKind::Name);
            let regexp_or_wildcard_token = self.try_consume_regexp_or_wildcard(name_token.as_ref());

            if name_token.is_some() || regexp_or_wildcard_token.is_some() {
                let mut prefix = char_token.map(|token| token.value).unwrap_or_default();
                if !prefix.is_empty() && !self.options.is_prefix(&prefix) {
                    self.pending_fixed_value.push_str(&prefix);
                    prefix.clear();
                }
                self.maybe_add_part_from_pending_fixed_value();
                let modifier_token = self.try_consume_modifier();
                self.add_part(
                    prefix,
                    name_token,
                    regexp_or_wildcard_token,
                    String::new(),
                    modifier_token,
                )?;
                continue;
            }

            let fixed_token = match char_token {
                Some(token) => Some(token),
                None => self.try_consume(TokenKind::EscapedChar),
            };
            if let Some(token) = fixed_token {
                self.pending_fixed_value.push_str(&token.value);
                continue;
            }

            if let Some(open_token) = self.try_consume(TokenKind::Open) {
                let prefix = self.consume_text();
                let name_token = self.try_consume(TokenKind::Name);
                let regexp_or_wildcard_token =
                    self.try_consume_regexp_or_wildcard(name_token.as_ref());
                let suffix = self.consume_text();
                if self.try_consume(TokenKind::Close).is_none() {
                    return Err(PatternError::MalformedBrace {
                        index: open_token.index,
                    });
                }
                let modifier_token = self.try_consume_modifier();
                self.add_part(
                    prefix,
                    name_token,
                    regexp_or_wildcard_token,
                    suffix,
                    modifier_token,
                )?;
                continue;
            }

            self.maybe_add_part_from_pending_fixed_value();
            self.consume_required(TokenKind::End)?;
        }

        Ok(self.parts)
    }

    fn try_consume(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.tokens.get(self.index)?;
        if token.kind != kind {
            return None;
        }
        self.index += 1;
        Some(token.clone())
    }

    fn try_consume_modifier(&mut self) -> Option<Token> {
        let token = self
            .tokens
            .get(self.index)
            .filter(|token| token.is_modifier())?
            .clone();
        self.index += 1;
        Some(token)
    }

    // `*` only starts a wildcard when no name precedes it; after a name it is a modifier.
    fn try_consume_regexp_or_wildcard(&mut self, name_token: Option<&Token>) -> Option<Token> {
        let token = self.try_consume(TokenKind::Regexp);
        if name_token.is_none() && token.is_none() {
            return self.try_consume(TokenKind::Asterisk);
        }
        token
    }

    fn consume_required(&mut self, kind: TokenKind) -> PatternResult<Token> {
        if let Some(token) = self.try_consume(kind) {
            return Ok(token);
        }
        let (found, index) = self
            .tokens
            .get(self.index)
            .map(|token| (token.kind, token.index))
            .unwrap_or((TokenKind::End, 0));
        Err(PatternError::UnexpectedToken {
            expected: kind,
            found,
            index,
        })
    }

    fn consume_text(&mut self) -> String {
        let mut result = String::new();
        while let Some(token) = self
            .try_consume(TokenKind::Char)
            .or_else(|| self.try_consume(TokenKind::EscapedChar))
        {
            result.push_str(&token.value);
        }
        result
    }

    fn maybe_add_part_from_pending_fixed_value(&mut self) {
        if self.pending_fixed_value.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending_fixed_value);
        let encoded = (self.encode)(&pending);
        self.parts.push(Part::fixed_text(encoded, Modifier::None));
    }

    fn add_part(
        &mut self,
        prefix: String,
        name_token: Option<Token>,
        regexp_or_wildcard_token: Option<Token>,
        suffix: String,
        modifier_token: Option<Token>,
    ) -> PatternResult<()> {
        let modifier = modifier_token
            .map(|token| Modifier::from_token_value(&token.value))
            .unwrap_or_default();

        // `{text}` without a modifier is plain fixed text, `{}` contributes nothing
        if name_token.is_none()
            && regexp_or_wildcard_token.is_none()
            && (modifier == Modifier::None || prefix.is_empty())
        {
            self.pending_fixed_value.push_str(&prefix);
            return Ok(());
        }

        self.maybe_add_part_from_pending_fixed_value();

        let Some(capture_token) = name_token.as_ref().or(regexp_or_wildcard_token.as_ref()) else {
            debug_assert!(suffix.is_empty());
            let encoded = (self.encode)(&prefix);
            self.parts.push(Part::fixed_text(encoded, modifier));
            return Ok(());
        };
        let index = capture_token.index;

        let regexp_value = match &regexp_or_wildcard_token {
            None => self.segment_wildcard_regexp.clone(),
            Some(token) if token.kind == TokenKind::Asterisk => FULL_WILDCARD_REGEXP.to_string(),
            Some(token) => token.value.clone(),
        };

        let (kind, value) = if regexp_value == self.segment_wildcard_regexp {
            (PartType::SegmentWildcard, String::new())
        } else if regexp_value == FULL_WILDCARD_REGEXP {
            (PartType::FullWildcard, String::new())
        } else {
            (PartType::Regexp, regexp_value)
        };

        let name = match name_token {
            Some(token) => PartName::Named(token.value),
            None => {
                let name = PartName::Index(self.next_numeric_name);
                self.next_numeric_name += 1;
                name
            }
        };

        if !self.names.insert(name.clone()) {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "parse_pattern",
                name = %name,
                index = index as u64,
                "duplicate part name"
            );
            return Err(PatternError::DuplicateName {
                name: name.to_string(),
                index,
            });
        }

        let encoded_prefix = (self.encode)(&prefix);
        let encoded_suffix = (self.encode)(&suffix);
        self.parts.push(Part::capture(
            kind,
            value,
            modifier,
            name,
            encoded_prefix,
            encoded_suffix,
        ));
        Ok(())
    }
}
