//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through a source buffer one byte at a time. Source text is
//! single-byte ASCII; bytes outside that range are passed through untouched
//! and count as one column each.

/// A cursor for traversing source code byte by byte.
///
/// The cursor tracks the byte offset of the next unread byte and the
/// 1-based line and column of that byte.
///
/// # Example
///
/// ```
/// use arixc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"1\n+");
///
/// assert_eq!(cursor.advance(), Some(b'1'));
/// assert_eq!(cursor.advance(), Some(b'\n'));
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// assert_eq!(cursor.current_byte(), Some(b'+'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source bytes being traversed.
    source: &'src [u8],

    /// Offset of the next unread byte.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves back to offset 0, line 1, column 1.
    pub fn reset(&mut self) {
        self.position = 0;
        self.line = 1;
        self.column = 1;
    }

    /// Returns the next unread byte, or `None` at the end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` positions past the next unread one.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Consumes and returns the next byte.
    ///
    /// A newline moves to column 1 of the following line; any other byte
    /// moves one column right. Does nothing at the end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let byte = self.current_byte()?;
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Consumes bytes while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while self.current_byte().is_some_and(&mut predicate) {
            self.advance();
        }
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line of the next unread byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next unread byte (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The whole source buffer.
    #[inline]
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// The bytes from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.source[start..self.position]
    }
}
