//! Error-reporting sinks.
//!
//! The scanner never decides how an error is shown or whether it is
//! fatal. It hands each lexical error to a [`Diagnostics`] implementation
//! and keeps going; the caller inspects the sink afterwards.

use std::io::{self, Write};

use crate::lexer::LexError;

/// Receiver for line-tagged error reports.
pub trait Diagnostics {
    /// Record one error. `location` is empty for lexical errors.
    fn report(&mut self, line: usize, location: &str, message: &str);

    /// Record a lexical error. Sinks that want the typed error override
    /// this; the default forwards to [`Diagnostics::report`].
    fn lex_error(&mut self, error: &LexError) {
        self.report(error.line, "", &error.kind.to_string());
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        (**self).report(line, location, message);
    }

    fn lex_error(&mut self, error: &LexError) {
        (**self).lex_error(error);
    }
}

/// Render a report the way the console sink prints it.
#[must_use]
pub fn format_report(line: usize, location: &str, message: &str) -> String {
    if location.is_empty() {
        format!("[line {line}] Error: {message}")
    } else {
        format!("[line {line}] Error {location}: {message}")
    }
}

/// One recorded report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_report(self.line, &self.location, &self.message))
    }
}

/// In-memory sink that keeps every report in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog {
    diagnostics: Vec<Diagnostic>,
    lex_errors: Vec<LexError>,
}

impl ErrorLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Typed lexical errors, a subset of [`ErrorLog::diagnostics`].
    #[must_use]
    pub fn lex_errors(&self) -> &[LexError] {
        &self.lex_errors
    }

    #[must_use]
    pub fn into_lex_errors(self) -> Vec<LexError> {
        self.lex_errors
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.lex_errors.clear();
    }
}

impl Diagnostics for ErrorLog {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            location: location.to_string(),
            message: message.to_string(),
        });
    }

    fn lex_error(&mut self, error: &LexError) {
        self.report(error.line, "", &error.kind.to_string());
        self.lex_errors.push(error.clone());
    }
}

/// Sink that prints each report as it arrives and remembers whether any
/// error was seen.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    had_error: bool,
}

impl Console<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Console<W> {
    pub const fn new(out: W) -> Self {
        Self {
            out,
            had_error: false,
        }
    }

    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    /// Forget earlier errors, e.g. between prompt lines.
    pub const fn reset(&mut self) {
        self.had_error = false;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Diagnostics for Console<W> {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.had_error = true;
        if let Err(e) = writeln!(self.out, "{}", format_report(line, location, message)) {
            tracing::warn!(error = %e, "failed to write diagnostic");
        }
    }
}
