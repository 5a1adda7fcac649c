//! Number literal lexing.
//!
//! A numeric literal is a run of ASCII digits. There is no decimal point,
//! exponent, sign, or digit separator: `3.14` scans as `3`, an ignored `.`,
//! and `14`.

use crate::lexer::ScanOutcome;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Lexes the rest of a numeric literal whose first digit was consumed.
    pub(crate) fn lex_number(&mut self) -> ScanOutcome {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        ScanOutcome::Token(TokenKind::NumericLiteral)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn lex_numbers(source: &str) -> Vec<(usize, usize, String)> {
        let mut lexer = Lexer::from_source(source);
        lexer
            .scan()
            .unwrap()
            .iter()
            .filter(|t| t.kind == TokenKind::NumericLiteral)
            .map(|t| (t.start(), t.end(), t.lexeme.to_string()))
            .collect()
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(lex_numbers("7"), vec![(0, 1, "7".to_string())]);
    }

    #[test]
    fn test_digit_run() {
        assert_eq!(lex_numbers("123456"), vec![(0, 6, "123456".to_string())]);
    }

    #[test]
    fn test_leading_zeros_kept() {
        assert_eq!(lex_numbers("007"), vec![(0, 3, "007".to_string())]);
    }

    #[test]
    fn test_run_ends_at_operator() {
        assert_eq!(
            lex_numbers("12+345"),
            vec![(0, 2, "12".to_string()), (3, 6, "345".to_string())]
        );
    }

    #[test]
    fn test_no_decimal_point() {
        assert_eq!(
            lex_numbers("3.14"),
            vec![(0, 1, "3".to_string()), (2, 4, "14".to_string())]
        );
    }

    #[test]
    fn test_value_larger_than_u64() {
        let digits = "9".repeat(40);
        assert_eq!(lex_numbers(&digits), vec![(0, 40, digits.clone())]);
    }
}
