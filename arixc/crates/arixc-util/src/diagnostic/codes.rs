//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! # Examples
//!
//! ```
//! use arixc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER CODES (E1xxx)
    // =========================================================================

    /// A byte that starts no token.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// Input that needs a lexer feature which does not exist yet.
    pub const E_LEXER_UNSUPPORTED: Self = Self::new("E", 1002);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 42).as_str(), "W0042");
        assert_eq!(DiagnosticCode::E_LEXER_UNSUPPORTED.as_str(), "E1002");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
        assert_eq!(format!("{}", code), "E1001");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1001)");
    }
}
