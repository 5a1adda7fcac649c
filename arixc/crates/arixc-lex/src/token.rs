//! Token definitions.
//!
//! A [`Token`] is an immutable value: a [`TokenKind`], the [`TextSpan`] of
//! source bytes it was scanned from, and the [`Span`] locating those bytes.

use std::fmt;

use arixc_util::{Span, TextSpan};

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Text between double quotes. Reserved: no scanning path produces it.
    StringLiteral,
    /// A run of ASCII digits.
    NumericLiteral,
}

impl TokenKind {
    /// Maps a single-byte operator or delimiter to its kind.
    ///
    /// # Example
    ///
    /// ```
    /// use arixc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_byte(b'/'), Some(TokenKind::Slash));
    /// assert_eq!(TokenKind::from_byte(b'7'), None);
    /// ```
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Star),
            b'/' => Some(TokenKind::Slash),
            b'(' => Some(TokenKind::OpenParen),
            b')' => Some(TokenKind::CloseParen),
            _ => None,
        }
    }

    /// Source spelling for single-byte kinds, a description for literals.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumericLiteral => "numeric literal",
        }
    }

    /// Returns true for the four arithmetic operators.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }

    /// Returns true for string and numeric literals.
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::StringLiteral | TokenKind::NumericLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with its location.
///
/// `lexeme` views exactly the bytes `span.start..span.end` of the buffer the
/// lexer was created over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the lexeme was classified as.
    pub kind: TokenKind,
    /// The source bytes of the lexeme.
    pub lexeme: TextSpan<'src>,
    /// Byte range and position of the lexeme.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a token. `lexeme` and `span` must cover the same bytes.
    #[inline]
    pub fn new(kind: TokenKind, lexeme: TextSpan<'src>, span: Span) -> Self {
        debug_assert_eq!(lexeme.len(), span.len());
        Self { kind, lexeme, span }
    }

    /// Byte offset of the first byte of the lexeme.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last byte of the lexeme.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Line of the first byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first byte (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

impl fmt::Display for Token<'_> {
    /// `NumericLiteral "87" at 1:9`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} \"{}\" at {}:{}",
            self.kind,
            self.lexeme,
            self.line(),
            self.column()
        )
    }
}
