//! Lexical scanner for the Lox scripting language.
//!
//! Turns source text into a flat sequence of classified tokens, each with
//! its lexeme, decoded literal, and source line. Lexical errors never stop
//! a scan: they are handed to a [`Diagnostics`] sink and scanning resumes,
//! so one pass reports every problem in a file.
//!
//! # Quick start
//!
//! ```
//! use lox_scanner::{TokenKind, tokenize};
//!
//! let tokens = tokenize("var answer = 42;").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! ## Collecting errors
//!
//! ```
//! use lox_scanner::{ErrorLog, LexErrorKind, scan};
//!
//! let mut log = ErrorLog::new();
//! let tokens = scan("print @ \"open", &mut log);
//! assert_eq!(tokens.len(), 2); // PRINT, EOF
//! let kinds: Vec<_> = log.lex_errors().iter().map(|e| &e.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [&LexErrorKind::UnexpectedCharacter('@'), &LexErrorKind::UnterminatedString]
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod diagnostics;
pub mod lexer;
pub mod token;

pub use diagnostics::{Console, Diagnostic, Diagnostics, ErrorLog, format_report};
pub use lexer::{LexError, LexErrorKind, LexErrors, scan, tokenize};
pub use token::{Literal, Token, TokenKind};
