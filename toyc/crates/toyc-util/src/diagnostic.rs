//! Diagnostic levels and codes.
//!
//! Every fatal lexical error maps to a stable [`DiagnosticCode`] so the
//! driver can print `error[E0001]: ...` lines that users can search for.
//!
//! # Examples
//!
//! ```
//! use toyc_util::diagnostic::{DiagnosticCode, Level};
//!
//! let code = DiagnosticCode::UNEXPECTED_CHARACTER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 2);
//! assert_eq!(format!("{}[{}]", Level::Error, code), "error[E0002]");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// The lexer has no warning tier; `Note` exists for context lines the
/// driver attaches to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error that rejects the whole input
    Error,
    /// Additional information about an error
    Note,
}

impl Level {
    /// Returns the lowercase name used in rendered diagnostics.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Note => "note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` with the number padded to
/// four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E0001: a character outside the language alphabet
    pub const INVALID_CHARACTER: Self = Self::new("E", 1);
    /// E0002: a character with no valid transition from the current state
    pub const UNEXPECTED_CHARACTER: Self = Self::new("E", 2);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
