//! Borrowed views into source text.

use std::fmt;

use crate::arena::Arena;

/// An immutable view over a byte range of a larger buffer.
///
/// A `TextSpan` never owns or copies the bytes it describes: it is a pointer
/// and a length into the buffer it was built from. The `'src` lifetime ties
/// every span to that buffer, so the buffer is guaranteed to outlive it.
///
/// # Examples
///
/// ```
/// use arixc_util::span::TextSpan;
///
/// let source = b"1 + 4 / 87";
/// let span = TextSpan::new(source, 8, 2);
/// assert_eq!(span.as_bytes(), b"87");
/// assert_eq!(span.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan<'src> {
    bytes: &'src [u8],
}

impl<'src> TextSpan<'src> {
    /// Creates a view over `base[at..at + length]`.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie inside `base`. Offsets are the
    /// caller's responsibility; an out-of-range span is a contract violation.
    #[inline]
    pub fn new(base: &'src [u8], at: usize, length: usize) -> Self {
        match at.checked_add(length) {
            Some(end) if end <= base.len() => Self {
                bytes: &base[at..end],
            },
            _ => panic!(
                "text span {}..{}+{} out of range for buffer of {} bytes",
                at,
                at,
                length,
                base.len()
            ),
        }
    }

    /// The viewed bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// The viewed bytes as text, or `None` if they are not valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.bytes).ok()
    }

    /// Length of the view in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for a zero-length view.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies the viewed bytes into `arena`, detaching the span from the
    /// buffer it was created over.
    ///
    /// # Examples
    ///
    /// ```
    /// use arixc_util::{Arena, TextSpan};
    ///
    /// let arena = Arena::new();
    /// let detached = {
    ///     let source = String::from("(42)");
    ///     TextSpan::new(source.as_bytes(), 1, 2).copy_into(&arena)
    /// };
    /// assert_eq!(detached, "42");
    /// ```
    pub fn copy_into<'a>(&self, arena: &'a Arena) -> TextSpan<'a> {
        TextSpan {
            bytes: arena.alloc_slice_copy(self.bytes),
        }
    }
}

impl PartialEq<str> for TextSpan<'_> {
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for TextSpan<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl fmt::Debug for TextSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextSpan({:?})", String::from_utf8_lossy(self.bytes))
    }
}

impl fmt::Display for TextSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.bytes))
    }
}
