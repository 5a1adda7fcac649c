//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Phases do not stop on every problem they find. They record a
//! [`Diagnostic`] in a [`Handler`] and keep going; the caller decides what to
//! do with the collected list once the phase is over.
//!
//! # Examples
//!
//! ```
//! use arixc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use arixc_util::Span;
//!
//! let mut handler = Handler::new();
//! handler.emit(
//!     Diagnostic::error("unexpected character '@'", Span::new(2, 3, 1, 3))
//!         .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod codes;

pub use codes::DiagnosticCode;

use std::fmt;

use crate::Span;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that makes the phase output unusable
    Error,
    /// Something suspicious that does not block later phases
    Warning,
    /// Additional information
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            span,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders as `error[E1001]: message at 1:3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(
            f,
            ": {} at {}:{}",
            self.message, self.span.line, self.span.column
        )
    }
}

/// Collects diagnostics emitted during a phase
#[derive(Clone, Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Number of diagnostics of any level
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Removes and returns every collected diagnostic
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Note.to_string(), "note");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unexpected character '@'", Span::new(4, 5, 2, 3))
            .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
        assert_eq!(
            diag.to_string(),
            "error[E1001]: unexpected character '@' at 2:3"
        );

        let plain = Diagnostic::warning("odd", Span::point(0, 1, 1));
        assert_eq!(plain.to_string(), "warning: odd at 1:1");
    }

    #[test]
    fn test_handler_counts() {
        let mut handler = Handler::new();
        assert!(handler.is_empty());
        assert!(!handler.has_errors());

        handler.emit(Diagnostic::warning("w", Span::DUMMY));
        assert!(!handler.has_errors());

        handler.emit(Diagnostic::error("e1", Span::DUMMY));
        handler.emit(Diagnostic::error("e2", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.len(), 3);
    }

    #[test]
    fn test_handler_take_drains() {
        let mut handler = Handler::new();
        handler.emit(Diagnostic::error("e", Span::DUMMY));
        let taken = handler.take();
        assert_eq!(taken.len(), 1);
        assert!(handler.is_empty());
    }
}
