#![allow(dead_code)]

use lox_scanner::{ErrorLog, LexErrorKind, Token, TokenKind, scan, tokenize};

/// Kinds of a source that must scan cleanly.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap_or_else(|e| panic!("tokenize failed for {source:?}: {e}"))
        .iter()
        .map(|t| t.kind)
        .collect()
}

/// Scan with an in-memory sink, returning tokens and error kinds.
pub fn scan_with_errors(source: &str) -> (Vec<Token>, Vec<LexErrorKind>) {
    let mut log = ErrorLog::new();
    let tokens = scan(source, &mut log);
    let errors = log.lex_errors().iter().map(|e| e.kind.clone()).collect();
    (tokens, errors)
}
