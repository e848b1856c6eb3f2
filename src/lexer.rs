use std::fmt;

use crate::diagnostics::{Diagnostics, ErrorLog};
use crate::token::{Literal, Token, TokenKind};

/// Classifies a lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// End of input inside a string literal.
    UnterminatedString,
    /// End of input inside a `/* ... */` comment.
    UnterminatedComment,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => write!(f, "Unexpected character '{ch}'."),
            Self::UnterminatedString => write!(f, "Unterminated string."),
            Self::UnterminatedComment => write!(f, "Unterminated comment."),
        }
    }
}

/// Error produced during scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

/// Every lexical error found in one source, in source order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} lexical error(s), first: {}", .0.len(), first_error(.0))]
pub struct LexErrors(pub Vec<LexError>);

impl LexErrors {
    #[must_use]
    pub fn errors(&self) -> &[LexError] {
        &self.0
    }
}

fn first_error(errors: &[LexError]) -> String {
    errors
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

/// Scan `source` into tokens, reporting lexical errors to `diagnostics`.
///
/// Scanning never stops early: a malformed lexeme is reported and
/// skipped, and the returned sequence always ends with one `Eof` token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan<D: Diagnostics + ?Sized>(source: &str, diagnostics: &mut D) -> Vec<Token> {
    Scanner::new(source, diagnostics).scan_tokens()
}

/// Scan `source`, returning the tokens only if no lexical error occurred.
///
/// # Errors
///
/// Returns every `LexError` found, in source order.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexErrors> {
    let mut log = ErrorLog::new();
    let tokens = scan(source, &mut log);
    if log.has_errors() {
        Err(LexErrors(log.into_lex_errors()))
    } else {
        Ok(tokens)
    }
}

struct Scanner<'a, D: ?Sized> {
    source: &'a str,
    diagnostics: &'a mut D,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    /// Line at `start`; strings may move `line` before their token is added.
    start_line: usize,
    errors: usize,
}

impl<'a, D: Diagnostics + ?Sized> Scanner<'a, D> {
    fn new(source: &'a str, diagnostics: &'a mut D) -> Self {
        Self {
            source,
            diagnostics,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            errors: 0,
        }
    }

    fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        tracing::debug!(
            tokens = self.tokens.len(),
            errors = self.errors,
            lines = self.line,
            "scan complete"
        );
        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => self.slash(),
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),
            c => self.error(LexErrorKind::UnexpectedCharacter(c)),
        }
    }

    fn slash(&mut self) {
        if self.match_char('/') {
            while self.peek().is_some_and(|c| c != '\n') {
                self.advance();
            }
        } else if self.match_char('*') {
            self.block_comment();
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    // The first `*/` closes the comment; nesting is not tracked.
    fn block_comment(&mut self) {
        loop {
            match self.peek() {
                None => {
                    self.error(LexErrorKind::UnterminatedComment);
                    return;
                }
                Some('*') if self.peek_next() == Some('/') => {
                    self.advance();
                    self.advance();
                    return;
                }
                Some(c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }
    }

    fn string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(LexErrorKind::UnterminatedString);
            return;
        }

        self.advance(); // closing quote

        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_literal(TokenKind::String, Some(Literal::String(value)));
    }

    fn number(&mut self) {
        self.digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // '.'
            self.digits();
        }

        let value: f64 = self
            .lexeme()
            .parse()
            .expect("ASCII digits with an optional fraction parse as f64");
        self.add_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.match_char(expected) {
            matched
        } else {
            otherwise
        };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme().to_string(), literal, self.start_line);
        tracing::trace!(%token, line = token.line, "token");
        self.tokens.push(token);
    }

    fn error(&mut self, kind: LexErrorKind) {
        let error = LexError {
            kind,
            line: self.line,
        };
        tracing::debug!(%error, "lexical error");
        self.errors += 1;
        self.diagnostics.lex_error(&error);
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    const fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
