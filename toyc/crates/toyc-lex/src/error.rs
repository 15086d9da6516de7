//! Fatal lexical errors.
//!
//! Both kinds reject the whole input: the lexer does not skip the offending
//! character and offers no partial result. Once an error has been returned,
//! every further call on the same [`Lexer`](crate::Lexer) returns it again.

use thiserror::Error;
use toyc_util::{DiagnosticCode, Span};

use crate::state::State;

/// Error raised while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside the language alphabet.
    #[error("invalid character {ch:?} at {span}")]
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Where it appears
        span: Span,
    },

    /// A character (or the end of input) with no transition from the
    /// current state.
    #[error("unexpected {} in state {state} at {span}", describe(.ch))]
    UnexpectedCharacter {
        /// The offending character; `None` for the end of input
        ch: Option<char>,
        /// The state the machine was in
        state: State,
        /// Where it appears
        span: Span,
    },
}

fn describe(ch: &Option<char>) -> String {
    match ch {
        Some(c) => format!("character {c:?}"),
        None => "end of input".to_string(),
    }
}

impl LexError {
    /// The stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidCharacter { .. } => DiagnosticCode::INVALID_CHARACTER,
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::UNEXPECTED_CHARACTER,
        }
    }

    /// Where the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::InvalidCharacter { span, .. } | LexError::UnexpectedCharacter { span, .. } => {
                *span
            }
        }
    }
}

/// Result type alias for lexing operations
pub type Result<T> = std::result::Result<T, LexError>;
