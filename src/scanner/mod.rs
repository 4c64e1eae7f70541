use crate::error::{Reporter, ScanError};
use token::{Literal, Token, TokenKind};

mod keywords;
pub mod token;

/// Scans `source` to completion, sending lexical problems to `reporter`.
pub fn scan<'source, R>(source: &'source str, reporter: &mut R) -> Vec<Token<'source>>
where
    R: Reporter + ?Sized,
{
    Scanner::new(source, reporter).scan_tokens()
}

pub struct Scanner<'source, 'r, R: ?Sized> {
    reporter: &'r mut R,
    tokens: Vec<Token<'source>>,
    source: &'source str,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
}

impl<'source, 'r, R> Scanner<'source, 'r, R>
where
    R: Reporter + ?Sized,
{
    pub fn new(source: &'source str, reporter: &'r mut R) -> Self {
        Self {
            reporter,
            tokens: Vec::new(),
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token<'source>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }
        self.tokens.push(Token::new(TokenKind::Eof, "", None, self.line));
        tracing::debug!(tokens = self.tokens.len(), lines = self.line, "scan finished");
        self.tokens
    }

    fn scan_token(&mut self) {
        let byte = self.advance();
        match byte {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'/' => {
                if self.is_match(b'/') {
                    self.skip_line_comment();
                } else if self.is_match(b'*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b'!' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::BangEqual),
                false => self.add_token(TokenKind::Bang),
            },
            b'=' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::EqualEqual),
                false => self.add_token(TokenKind::Equal),
            },
            b'<' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::LessEqual),
                false => self.add_token(TokenKind::Less),
            },
            b'>' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::GreaterEqual),
                false => self.add_token(TokenKind::Greater),
            },
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            b if is_digit(b) => self.number(),
            b if is_alpha(b) => self.identifier(),
            _ => self.unexpected_character(),
        }
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal<'source>>) {
        let token = Token::new(kind, self.lexeme(), literal, self.start_line);
        #[cfg(feature = "debug_trace")]
        tracing::trace!(line = token.line, "{token}");
        self.tokens.push(token);
    }

    fn error(&mut self, error: ScanError) {
        tracing::debug!(line = self.line, ?error, "lexical error");
        self.reporter.report(self.line, &error.to_string());
    }

    fn unexpected_character(&mut self) {
        // Skip the whole character so a multi-byte one is reported once.
        let character = self.source[self.start..].chars().next().unwrap_or('\0');
        self.current = self.start + character.len_utf8();
        self.error(ScanError::UnexpectedCharacter(character));
    }

    fn skip_line_comment(&mut self) {
        while self.peek() != b'\n' && !self.is_at_end() {
            self.current += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        loop {
            if self.is_at_end() {
                self.error(ScanError::UnterminatedComment);
                return;
            }
            if self.peek() == b'*' && self.peek_next() == Some(b'/') {
                self.current += 2;
                return;
            }
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }
    }

    fn string(&mut self) {
        while self.peek() != b'"' && !self.is_at_end() {
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }
        if self.is_at_end() {
            self.error(ScanError::UnterminatedString);
            return;
        }
        // The closing quote.
        self.current += 1;
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Some(Literal::String(value)));
    }

    fn number(&mut self) {
        while is_digit(self.peek()) {
            self.current += 1;
        }
        if self.peek() == b'.' && self.peek_next().is_some_and(is_digit) {
            self.current += 1;
            while is_digit(self.peek()) {
                self.current += 1;
            }
        }
        let value = match self.lexeme().parse() {
            Ok(value) => value,
            Err(_) => unreachable!("digit runs always parse as f64"),
        };
        self.add_literal_token(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.current += 1;
        }
        let kind = keywords::lookup(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn advance(&mut self) -> u8 {
        let byte = self.peek();
        self.current += 1;
        byte
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn is_match(&mut self, byte: u8) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.peek() != byte {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.current).copied().unwrap_or(b'\0')
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current + 1).copied()
    }
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_alphanumeric(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte)
}
