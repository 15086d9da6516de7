//! The FSM scan engine.
//!
//! [`ScanEngine::scan`] runs the machine one character at a time until it
//! accepts a token. On acceptance the triggering character is left under
//! the cursor, so it is classified again as the first character of the next
//! scan.

use std::mem;

use toyc_util::Span;
use tracing::trace;

use crate::class::classify;
use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::state::{DotPolicy, State, Transition, TransitionTable};
use crate::token::{Token, TokenKind};

/// Text of the token being scanned, plus where it started.
#[derive(Debug, Default)]
struct LexemeBuffer {
    text: String,
    start: Option<Span>,
}

impl LexemeBuffer {
    fn push(&mut self, c: char, at: Span) {
        if self.start.is_none() {
            self.start = Some(at);
        }
        self.text.push(c);
    }

    /// Takes the buffered text and its span, leaving the buffer empty.
    fn take(&mut self) -> (String, Span) {
        let text = mem::take(&mut self.text);
        let start = self.start.take().unwrap_or_default();
        let span = Span::new(start.start, start.start + text.len(), start.line, start.column);
        (text, span)
    }
}

/// Drives the transition table over a [`Cursor`], producing raw units.
///
/// Raw units have not been through keyword promotion or real-number fusion;
/// that is the job of [`Lexer`](crate::Lexer).
pub struct ScanEngine<'a> {
    pub(super) cursor: Cursor<'a>,
    table: &'a TransitionTable,
    pub(super) state: State,
    lexeme: LexemeBuffer,
    /// The `.` split off a `<digits>.` under [`DotPolicy::Fallback`].
    deferred: Option<Token>,
}

impl<'a> ScanEngine<'a> {
    /// Creates an engine at the start of `source`.
    pub fn new(source: &'a str, table: &'a TransitionTable) -> Self {
        Self {
            cursor: Cursor::new(source),
            table,
            state: State::Idle,
            lexeme: LexemeBuffer::default(),
            deferred: None,
        }
    }

    /// The current machine state.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Scans the next raw unit.
    ///
    /// Once the source is exhausted this returns an end-of-input token on
    /// every call.
    pub fn scan(&mut self) -> Result<Token> {
        if let Some(token) = self.deferred.take() {
            return Ok(token);
        }

        loop {
            if self.state == State::AtEndOfInput {
                let here = Span::point(self.cursor.position(), self.cursor.line(), self.cursor.column());
                return Ok(Token::new(TokenKind::EndOfInput, "", here));
            }

            let ch = self.cursor.current();
            let class = classify(ch).map_err(|ch| LexError::InvalidCharacter {
                ch,
                span: self.cursor.current_span(),
            })?;

            let next = match self.table.step(self.state, class) {
                Transition::To(next) => next,
                Transition::Invalid => {
                    return Err(LexError::UnexpectedCharacter {
                        ch,
                        state: self.state,
                        span: self.cursor.current_span(),
                    })
                }
            };

            // Acceptance: the current character is not consumed.
            if next == State::Idle && self.state != State::Idle {
                let finished = mem::replace(&mut self.state, State::Idle);
                match self.package(finished) {
                    Some(token) => return Ok(token),
                    None => continue,
                }
            }

            if let (true, Some(c)) = (next.is_content_bearing(), ch) {
                self.lexeme.push(c, self.cursor.current_span());
            }
            self.state = next;
            self.cursor.advance();

            if self.state == State::InComment {
                self.skip_comment();
            }
        }
    }

    /// Turns the buffered lexeme into a token for the state being left.
    ///
    /// Returns `None` for states that accept nothing (comment endings).
    fn package(&mut self, finished: State) -> Option<Token> {
        let (text, span) = self.lexeme.take();
        let kind = finished.token_kind()?;

        let token = if finished == State::InIntegerDot {
            debug_assert_eq!(self.table.dot_policy(), DotPolicy::Fallback);
            self.split_trailing_dot(text, span)
        } else {
            Token::new(kind, text, span)
        };

        trace!(kind = %token.kind(), lexeme = token.lexeme(), at = %token.span(), "accept");
        Some(token)
    }

    /// Splits `<digits>.` into an integer token and a deferred `.` separator.
    fn split_trailing_dot(&mut self, mut text: String, span: Span) -> Token {
        text.pop();
        let digits = text.len();
        let dot_span = Span::new(
            span.start + digits,
            span.end,
            span.line,
            span.column + digits as u32,
        );
        self.deferred = Some(Token::new(TokenKind::Separator, ".", dot_span));
        Token::new(
            TokenKind::IntegerLiteral,
            text,
            Span::new(span.start, span.start + digits, span.line, span.column),
        )
    }
}
