//! Property tests for the scanner over arbitrary inputs.

use arixc_lex::{LexConfig, Lexer, TokenKind, UnknownCharPolicy};
use proptest::prelude::*;

/// Scans bytes that never contain a quote, so the scan always succeeds.
fn scan_kinds_and_ranges(source: &[u8]) -> Vec<(TokenKind, usize, usize)> {
    let mut lexer = Lexer::new(source);
    lexer
        .scan()
        .unwrap()
        .iter()
        .map(|t| (t.kind, t.start(), t.end()))
        .collect()
}

fn quote_free_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("no quote", |b| *b != b'"'), 0..256)
}

proptest! {
    #[test]
    fn single_operator_yields_one_token(byte in prop::sample::select(b"+-*/()".to_vec())) {
        let source = [byte];
        let tokens = scan_kinds_and_ranges(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(Some(tokens[0].0), TokenKind::from_byte(byte));
        prop_assert_eq!((tokens[0].1, tokens[0].2), (0, 1));
    }

    #[test]
    fn digit_run_is_one_literal(digits in "[0-9]{1,200}") {
        let tokens = scan_kinds_and_ranges(digits.as_bytes());
        prop_assert_eq!(tokens, vec![(TokenKind::NumericLiteral, 0, digits.len())]);
    }

    #[test]
    fn whitespace_yields_nothing(source in "[ \t\r\n]{0,64}") {
        prop_assert!(scan_kinds_and_ranges(source.as_bytes()).is_empty());
    }

    #[test]
    fn lexemes_match_source_ranges(source in quote_free_bytes()) {
        let mut lexer = Lexer::new(&source);
        let tokens = lexer.scan().unwrap();

        let mut previous_end = 0;
        for token in tokens {
            prop_assert!(token.start() < token.end());
            prop_assert!(token.end() <= source.len());
            prop_assert!(previous_end <= token.start());
            prop_assert_eq!(token.lexeme.as_bytes(), &source[token.start()..token.end()]);
            previous_end = token.end();
        }
    }

    #[test]
    fn report_policy_never_fails(source in quote_free_bytes()) {
        let config = LexConfig::default().with_unknown_chars(UnknownCharPolicy::Report);
        let mut lexer = Lexer::with_config(&source, config);
        let count = lexer.scan().unwrap().len();
        prop_assert_eq!(count, scan_kinds_and_ranges(&source).len());
    }

    #[test]
    fn iterator_agrees_with_scan(source in quote_free_bytes()) {
        let mut lexer = Lexer::new(&source);
        let pulled: Vec<_> = lexer
            .iter()
            .map(|t| {
                let t = t.unwrap();
                (t.kind, t.start(), t.end())
            })
            .collect();
        prop_assert_eq!(pulled, scan_kinds_and_ranges(&source));
    }
}
