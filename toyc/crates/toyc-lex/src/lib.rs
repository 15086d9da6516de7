//! toyc-lex - Finite-state lexer for the toy procedural language
//!
//! This crate turns source text into an ordered sequence of typed tokens for
//! a downstream parser. Scanning is driven by an explicit finite state
//! machine: each character is classified, the transition table picks the
//! next state, and a token is accepted whenever the machine falls back to
//! `Idle`. The character that triggered the acceptance is not consumed; it
//! starts the next token.
//!
//! # Example Usage
//!
//! ```
//! use toyc_lex::{LexConfig, Lexer, TokenKind};
//!
//! let config = LexConfig::default();
//! let mut lexer = Lexer::new("while x < 10.5 ! loop\n", &config);
//!
//! let tokens = lexer.read_all().unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::RealLiteral,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! assert_eq!(tokens[3].lexeme(), "10.5");
//! ```
//!
//! # Module Structure
//!
//! - [`class`] - character classification
//! - [`state`] - FSM states and the transition table
//! - [`token`] - token kinds, tokens and the keyword set
//! - [`config`] - immutable scanner configuration
//! - [`cursor`] - character cursor over the source
//! - [`lexer`] - scan engine and token emitter
//! - [`error`] - fatal lexical errors
//!
//! # Token Categories
//!
//! - **Identifier**: a letter followed by letters, digits or `$`
//! - **Keyword**: `int float bool if else then endif while whileend do doend
//!   for forend input output and or function`
//! - **IntegerLiteral**: `42`
//! - **RealLiteral**: `3.14`
//! - **Operator**: `+ - * / % = < >`
//! - **Separator**: `( ) { } [ ] , : ; ' .`
//! - **EndOfInput**: returned forever once the source is exhausted
//!
//! `!` starts a comment that runs to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod class;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod state;
pub mod token;

mod edge_cases;

pub use class::{classify, CharClass};
pub use config::LexConfig;
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use state::{DotPolicy, State, Transition, TransitionTable};
pub use token::{KeywordSet, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_pairs(source: &str) -> Vec<(TokenKind, String)> {
        let config = LexConfig::default();
        let mut lexer = Lexer::new(source, &config);
        lexer
            .read_all()
            .unwrap()
            .into_iter()
            .map(|t| (t.kind(), t.lexeme().to_string()))
            .collect()
    }

    #[test]
    fn test_small_program() {
        let source = "\
function sum(int n)
{
    int total;
    total = 0;
    while n > 0 do
        total = total + n; ! accumulate
        n = n - 1;
    whileend
    output(total * 1.5);
}
";
        let tokens = lex_pairs(source);

        assert_eq!(tokens[0], (TokenKind::Keyword, "function".to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "sum".to_string()));
        assert_eq!(tokens[2], (TokenKind::Separator, "(".to_string()));
        assert_eq!(tokens[3], (TokenKind::Keyword, "int".to_string()));
        assert!(tokens.contains(&(TokenKind::Keyword, "whileend".to_string())));
        assert!(tokens.contains(&(TokenKind::Keyword, "output".to_string())));
        assert!(tokens.contains(&(TokenKind::RealLiteral, "1.5".to_string())));
        assert!(!tokens.iter().any(|(_, l)| l == "accumulate"));
        assert_eq!(tokens.last().map(|t| t.0), Some(TokenKind::EndOfInput));
    }

    #[test]
    fn test_if_then_else() {
        let tokens = lex_pairs("if a<b then c=a else c=b endif");
        let kinds: Vec<_> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Keyword,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_currency_in_identifier() {
        let tokens = lex_pairs("price$ total$2");
        assert_eq!(tokens[0], (TokenKind::Identifier, "price$".to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "total$2".to_string()));
    }

    #[test]
    fn test_empty_source() {
        let tokens = lex_pairs("");
        assert_eq!(tokens, [(TokenKind::EndOfInput, String::new())]);
    }

    #[test]
    fn test_comments_only() {
        let tokens = lex_pairs("! one\n! two\r\n!three");
        assert_eq!(tokens, [(TokenKind::EndOfInput, String::new())]);
    }
}
