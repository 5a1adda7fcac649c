//! String literal lexing.
//!
//! The `"` byte is reserved for string literals, which are not implemented.
//! Reaching one reports [`Feature::StringLiteral`]; the opening quote is
//! consumed and nothing is classified as a string.

use crate::error::Feature;
use crate::lexer::ScanOutcome;
use crate::Lexer;

impl<'src> Lexer<'src> {
    pub(crate) fn lex_string(&mut self) -> ScanOutcome {
        ScanOutcome::Unsupported(Feature::StringLiteral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    #[test]
    fn test_quote_reports_feature() {
        let mut lexer = Lexer::from_source("\"abc\"");
        assert_eq!(
            lexer.scan_lexeme(),
            ScanOutcome::Unsupported(Feature::StringLiteral)
        );
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn test_single_quote_is_not_reserved() {
        let mut lexer = Lexer::from_source("'1'");
        assert_eq!(lexer.scan().unwrap().len(), 1);
    }

    #[test]
    fn test_unterminated_quote_is_still_unsupported() {
        let mut lexer = Lexer::from_source("(\"");
        assert!(matches!(
            lexer.scan(),
            Err(LexError::Unsupported {
                feature: Feature::StringLiteral,
                ..
            })
        ));
    }
}
