//! Comment skipping.
//!
//! A `!` starts a comment that runs to the end of the line. There is no
//! block comment syntax.

use super::scan::ScanEngine;
use crate::class::is_line_terminator;
use crate::state::State;

impl<'a> ScanEngine<'a> {
    /// Discards characters up to, but not including, the next CR or LF, or
    /// up to the end of input.
    ///
    /// The machine stays in `InComment`, so the terminator is the next
    /// character stepped through the table.
    pub(super) fn skip_comment(&mut self) {
        debug_assert_eq!(self.state, State::InComment);

        while let Some(c) = self.cursor.current() {
            if is_line_terminator(c) {
                break;
            }
            self.cursor.advance();
        }
    }
}
