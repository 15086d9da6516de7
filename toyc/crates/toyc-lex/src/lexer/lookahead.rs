//! Lookahead queue.
//!
//! Raw units scanned ahead of the caller wait here until
//! [`Lexer::next_token`](crate::Lexer::next_token) drains them. The queue is
//! owned by the lexer; pushback never re-reads the source.

use std::collections::VecDeque;

use crate::token::Token;

/// FIFO of raw units that were scanned but not yet returned.
#[derive(Debug, Default)]
pub(crate) struct LookaheadQueue {
    pending: VecDeque<Token>,
}

impl LookaheadQueue {
    /// Removes and returns the oldest pending unit.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.pending.pop_front()
    }

    /// Puts a unit back so it is returned before anything already pending.
    ///
    /// Unreading several units therefore happens in reverse scan order.
    #[inline]
    pub(crate) fn unread(&mut self, token: Token) {
        self.pending.push_front(token);
    }

    /// Number of pending units.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}
