//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! [`Span`] records byte offsets plus line/column information, and
//! [`TextSpan`] is a borrowed view over the bytes a span covers.
//!
//! # Examples
//!
//! ```
//! use arixc_util::span::{Span, TextSpan};
//!
//! let source = b"12 + 3";
//! let span = Span::new(0, 2, 1, 1);
//! let text = TextSpan::new(source, span.start, span.len());
//! assert_eq!(text, "12");
//! ```

mod text_span;

pub use text_span::TextSpan;

use std::ops::Range;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end), end exclusive
/// - Line and column numbers of `start` (for human-readable output)
///
/// # Examples
///
/// ```
/// use arixc_util::span::Span;
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, 1, 5);
///
/// // Create a point span (single location)
/// let point = Span::point(10, 1, 5);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use arixc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use arixc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of bytes covered by the span
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// The byte range covered by the span
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns true if `offset` lies within the span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Create a span covering both `self` and `other`
    ///
    /// The position (line/column) is taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use arixc_util::span::Span;
    ///
    /// let lhs = Span::new(0, 1, 1, 1);
    /// let rhs = Span::new(4, 6, 1, 5);
    /// let whole = lhs.to(rhs);
    /// assert_eq!(whole.range(), 0..6);
    /// assert_eq!(whole.column, 1);
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}
