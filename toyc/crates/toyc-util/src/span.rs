//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or an error came from: a byte range into
//! the source plus the 1-based line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use toyc_util::span::Span;
//!
//! let span = Span::new(10, 20, 2, 5);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "2:5");
//! ```

use std::fmt;

/// Source location span
///
/// # Examples
///
/// ```
/// use toyc_util::span::Span;
///
/// let span = Span::new(0, 3, 1, 1);
/// let point = Span::point(3, 1, 4);
/// assert!(point.is_empty());
/// assert_eq!(span.to(point).end, 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for tests and synthesized values.
    ///
    /// ```
    /// use toyc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.line, 0);
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
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-width span at a byte offset.
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns a span from the start of `self` to the end of `other`.
    ///
    /// Line and column stay those of `self`, which must come first in the
    /// source.
    ///
    /// ```
    /// use toyc_util::span::Span;
    ///
    /// let int = Span::new(0, 3, 1, 1);
    /// let frac = Span::new(4, 6, 1, 5);
    /// assert_eq!(int.to(frac), Span::new(0, 6, 1, 1));
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        Span {
            end: other.end.max(self.end),
            ..self
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
