use super::token::is_valid_name_code_point;
use super::{
    GroupErrorReason, Token, TokenKind, TokenizePolicy, TokenizerError, TokenizerResult,
};

#[tracing::instrument(
    level = "trace",
    skip(input, policy),
    fields(input_len = input.len() as u64, policy = ?policy)
)]
pub fn tokenize(input: &[char], policy: TokenizePolicy) -> TokenizerResult<Vec<Token>> {
    Tokenizer::new(input, policy).run()
}

pub fn tokenize_str(input: &str, policy: TokenizePolicy) -> TokenizerResult<Vec<Token>> {
    let code_points: Vec<char> = input.chars().collect();
    tokenize(&code_points, policy)
}

struct Tokenizer<'a> {
    input: &'a [char],
    policy: TokenizePolicy,
    tokens: Vec<Token>,
    index: usize,
    next_index: usize,
    code_point: char,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a [char], policy: TokenizePolicy) -> Self {
        Self {
            input,
            policy,
            tokens: Vec::with_capacity(input.len() + 1),
            index: 0,
            next_index: 0,
            code_point: '\0',
        }
    }

    fn run(mut self) -> TokenizerResult<Vec<Token>> {
        while self.index < self.input.len() {
            self.seek_and_get_next_code_point(self.index);

            match self.code_point {
                '*' => self.add_token_with_default_position_and_length(TokenKind::Asterisk),
                '+' | '?' => {
                    self.add_token_with_default_position_and_length(TokenKind::OtherModifier)
                }
                '\\' => self.scan_escape()?,
                '{' => self.add_token_with_default_position_and_length(TokenKind::Open),
                '}' => self.add_token_with_default_position_and_length(TokenKind::Close),
                ':' => self.scan_name()?,
                '(' => self.scan_regexp()?,
                _ => self.add_token_with_default_position_and_length(TokenKind::Char),
            }
        }

        self.add_token_with_default_length(TokenKind::End, self.index, self.index);

        Ok(self.tokens)
    }

    fn scan_escape(&mut self) -> TokenizerResult<()> {
        if self.index == self.input.len() - 1 {
            let error = TokenizerError::UnterminatedEscape { index: self.index };
            return self.process_tokenizing_error(self.next_index, self.index, error);
        }

        let escaped_index = self.next_index;
        self.get_next_code_point();
        self.add_token_with_default_length(TokenKind::EscapedChar, self.next_index, escaped_index);
        Ok(())
    }

    fn scan_name(&mut self) -> TokenizerResult<()> {
        let name_start = self.next_index;
        let mut name_position = name_start;

        while name_position < self.input.len() {
            self.seek_and_get_next_code_point(name_position);
            let first = name_position == name_start;
            if !is_valid_name_code_point(self.code_point, first) {
                break;
            }
            name_position = self.next_index;
        }

        if name_position <= name_start {
            let error = TokenizerError::InvalidNameSyntax { index: self.index };
            return self.process_tokenizing_error(name_start, self.index, error);
        }

        self.add_token_with_default_length(TokenKind::Name, name_position, name_start);
        Ok(())
    }

    fn scan_regexp(&mut self) -> TokenizerResult<()> {
        let last = self.input.len() - 1;
        let regexp_start = self.next_index;
        let mut regexp_position = regexp_start;
        let mut depth = 1usize;

        while regexp_position < self.input.len() {
            self.seek_and_get_next_code_point(regexp_position);

            if !self.code_point.is_ascii() {
                return self.group_error(regexp_start, GroupErrorReason::NonAscii);
            }

            if regexp_position == regexp_start && self.code_point == '?' {
                return self.group_error(regexp_start, GroupErrorReason::LeadingQuestionMark);
            }

            if self.code_point == '\\' {
                if regexp_position == last {
                    return self.group_error(regexp_start, GroupErrorReason::UnterminatedEscape);
                }
                self.get_next_code_point();
                if !self.code_point.is_ascii() {
                    return self.group_error(regexp_start, GroupErrorReason::NonAscii);
                }
                regexp_position = self.next_index;
                continue;
            }

            if self.code_point == ')' {
                depth -= 1;
                if depth == 0 {
                    regexp_position = self.next_index;
                    break;
                }
            } else if self.code_point == '(' {
                depth += 1;
                if regexp_position == last {
                    return self.group_error(regexp_start, GroupErrorReason::Unterminated);
                }
                // nested groups must be non-capturing or lookaround
                let temporary_position = self.next_index;
                self.get_next_code_point();
                if self.code_point != '?' {
                    return self
                        .group_error(regexp_start, GroupErrorReason::NestedGroupNotNonCapturing);
                }
                self.next_index = temporary_position;
            }

            regexp_position = self.next_index;
        }

        if depth != 0 {
            return self.group_error(regexp_start, GroupErrorReason::Unterminated);
        }

        let regexp_length = regexp_position - regexp_start - 1;
        if regexp_length == 0 {
            let error = TokenizerError::EmptyGroupBody { index: self.index };
            return self.process_tokenizing_error(regexp_start, self.index, error);
        }

        self.add_token(TokenKind::Regexp, regexp_position, regexp_start, regexp_length);
        Ok(())
    }

    fn group_error(
        &mut self,
        regexp_start: usize,
        reason: GroupErrorReason,
    ) -> TokenizerResult<()> {
        let error = TokenizerError::UnterminatedOrInvalidGroup {
            index: self.index,
            reason,
        };
        self.process_tokenizing_error(regexp_start, self.index, error)
    }

    fn process_tokenizing_error(
        &mut self,
        next_position: usize,
        value_position: usize,
        error: TokenizerError,
    ) -> TokenizerResult<()> {
        match self.policy {
            TokenizePolicy::Strict => Err(error),
            TokenizePolicy::Lenient => {
                tracing::event!(
                    tracing::Level::DEBUG,
                    operation = "tokenize",
                    index = value_position as u64,
                    error = %error,
                    "recovered with invalid-char token"
                );
                self.add_token_with_default_length(
                    TokenKind::InvalidChar,
                    next_position,
                    value_position,
                );
                Ok(())
            }
        }
    }

    #[inline]
    fn get_next_code_point(&mut self) {
        self.code_point = self.input[self.next_index];
        self.next_index += 1;
    }

    #[inline]
    fn seek_and_get_next_code_point(&mut self, index: usize) {
        self.next_index = index;
        self.get_next_code_point();
    }

    fn add_token(
        &mut self,
        kind: TokenKind,
        next_position: usize,
        value_position: usize,
        value_length: usize,
    ) {
        let value: String = self.input[value_position..value_position + value_length]
            .iter()
            .collect();
        self.tokens.push(Token::new(kind, self.index, value));
        self.index = next_position;
    }

    fn add_token_with_default_length(
        &mut self,
        kind: TokenKind,
        next_position: usize,
        value_position: usize,
    ) {
        let computed_length = next_position - value_position;
        self.add_token(kind, next_position, value_position, computed_length);
    }

    fn add_token_with_default_position_and_length(&mut self, kind: TokenKind) {
        self.add_token_with_default_length(kind, self.next_index, self.index);
    }
}
