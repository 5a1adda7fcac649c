//! arixc-lex - Lexical Analyzer for Arix arithmetic expressions
//!
//! This crate turns a byte buffer into an ordered [`TokenBuffer`] for the
//! parser. Every [`Token`] carries its kind, a zero-copy view of its source
//! bytes, and its byte range with line and column.
//!
//! # Example Usage
//!
//! ```
//! use arixc_lex::{Lexer, TokenKind};
//!
//! let source = "(12 + 4) * 3";
//! let mut lexer = Lexer::from_source(source);
//! let tokens = lexer.scan().unwrap();
//!
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[0].kind, TokenKind::OpenParen);
//! assert_eq!(tokens[1].lexeme, "12");
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::from_source("1-2");
//! let kinds: Vec<_> = lexer
//!     .iter()
//!     .map(|token| token.unwrap().kind)
//!     .collect();
//! assert_eq!(kinds, [TokenKind::NumericLiteral, TokenKind::Minus, TokenKind::NumericLiteral]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Scan loop and lexeme classification
//! - [`cursor`] - Byte cursor with line/column tracking
//! - [`buffer`] - The growable token buffer
//! - [`config`] - Lexer settings, loadable from TOML
//! - [`error`] - Scan and configuration errors
//!
//! # Token Categories
//!
//! - **Operators**: `+`, `-`, `*`, `/`
//! - **Grouping**: `(`, `)`
//! - **Numeric literals**: runs of ASCII digits, `0`, `42`, `007`
//! - **String literals**: reserved; a `"` stops the scan with
//!   [`LexError::Unsupported`]
//!
//! Whitespace is skipped. Any other byte is skipped too by default; see
//! [`UnknownCharPolicy`] for reporting or rejecting it instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use buffer::TokenBuffer;
pub use config::{LexConfig, UnknownCharPolicy};
pub use cursor::Cursor;
pub use error::{ConfigError, Feature, LexError, LexResult};
pub use lexer::{Lexer, ScanOutcome, TokenIter};
pub use token::{Token, TokenKind};

/// Scans `source` with the default configuration and returns the tokens.
///
/// # Example
///
/// ```
/// let tokens = arixc_lex::tokenize(b"8 / 2").unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(source: &[u8]) -> LexResult<TokenBuffer<'_>> {
    let mut lexer = Lexer::new(source);
    lexer.scan()?;
    Ok(lexer.into_tokens())
}
