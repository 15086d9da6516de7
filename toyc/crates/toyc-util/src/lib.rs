//! toyc-util - Shared foundation types
//!
//! Small types used by both the lexer and the command-line driver:
//!
//! - [`span`] - source locations attached to tokens and errors
//! - [`diagnostic`] - severity levels and stable diagnostic codes
//!
//! # Example
//!
//! ```
//! use toyc_util::{DiagnosticCode, Span};
//!
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(DiagnosticCode::INVALID_CHARACTER.as_str(), "E0001");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{DiagnosticCode, Level};
pub use span::Span;
