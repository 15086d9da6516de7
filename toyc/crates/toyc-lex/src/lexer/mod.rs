//! Lexer module.
//!
//! The FSM engine produces raw units; the public lexer turns them into
//! tokens.
//!
//! - `scan` - the FSM engine producing raw `(kind, lexeme)` units
//! - `comment` - line comment skipping for the engine
//! - `core` - the public [`Lexer`], which applies token transforms
//! - `identifier` - keyword promotion
//! - `number` - integer + `.` + integer fusion into real literals
//! - `lookahead` - queue of raw units scanned ahead of the caller

mod comment;
mod core;
mod identifier;
mod lookahead;
mod number;
mod scan;

pub use self::core::Lexer;
pub use self::scan::ScanEngine;
