//! Character cursor for traversing source code.
//!
//! The cursor is the scanner's only view of its input: it yields the
//! current character, or `None` once the source is exhausted, and tracks the
//! byte offset and line/column of that character.

use toyc_util::Span;

/// A cursor over borrowed source text.
///
/// # Example
///
/// ```
/// use toyc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('b'));
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// cursor.advance();
/// assert_eq!(cursor.current(), None);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `None` at the end of the source.
    #[inline]
    pub fn current(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.position)?;
        if b < 128 {
            return Some(b as char);
        }
        self.source[self.position..].chars().next()
    }

    /// Advances past the current character.
    ///
    /// Updates line and column tracking. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Span covering the current character, or a zero-width span at the end.
    pub fn current_span(&self) -> Span {
        let len = self.current().map_or(0, char::len_utf8);
        Span::new(self.position, self.position + len, self.line, self.column)
    }
}
