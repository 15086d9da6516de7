//! Error handling module for the toyc driver.
//!
//! Lexical errors come from `toyc-lex`; everything else that can go wrong
//! while reading input, loading configuration or writing output is
//! collected here.

use thiserror::Error;
use toyc_lex::LexError;

/// Main error type for the toyc driver.
#[derive(Error, Debug)]
pub enum ToycError {
    /// Error when the configuration cannot be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the input file cannot be read.
    #[error("Cannot read {path}: {source}")]
    Input {
        /// The path that was being read.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Error when the source is rejected by the lexer.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ToycError.
pub type Result<T> = std::result::Result<T, ToycError>;
