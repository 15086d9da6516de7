//! Core lexer implementation.
//!
//! [`Lexer`] is the public pull API. It takes raw units from the lookahead
//! queue, or from the scan engine once the queue is empty, and applies the
//! token transforms before handing tokens to the caller.

use crate::config::LexConfig;
use crate::error::{LexError, Result};
use crate::state::State;
use crate::token::{KeywordSet, Token, TokenKind};

use super::lookahead::LookaheadQueue;
use super::scan::ScanEngine;

/// Lexer for the toy language.
///
/// One lexer scans one source exactly once; create a new lexer to scan
/// again.
///
/// # Example
///
/// ```
/// use toyc_lex::{LexConfig, Lexer, TokenKind};
///
/// let config = LexConfig::default();
/// let mut lexer = Lexer::new("x = 5,6", &config);
///
/// assert_eq!(lexer.next_token().unwrap().lexeme(), "x");
/// assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Operator);
/// assert_eq!(lexer.next_token().unwrap().lexeme(), "5");
/// assert_eq!(lexer.next_token().unwrap().lexeme(), ",");
/// assert_eq!(lexer.next_token().unwrap().lexeme(), "6");
/// assert!(lexer.next_token().unwrap().is_eof());
/// assert!(lexer.next_token().unwrap().is_eof());
/// ```
pub struct Lexer<'a> {
    /// FSM engine producing raw units.
    engine: ScanEngine<'a>,

    /// Raw units scanned ahead during real-number fusion.
    pub(super) lookahead: LookaheadQueue,

    /// Reserved words for keyword promotion.
    pub(super) keywords: &'a KeywordSet,

    /// The fatal error that stopped this scan, if any.
    failure: Option<LexError>,

    /// An error hit while scanning ahead, reported once the queue drains.
    pub(super) stalled: Option<LexError>,

    /// Whether the iterator has yielded its last item.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str, config: &'a LexConfig) -> Self {
        Self {
            engine: ScanEngine::new(source, config.table()),
            lookahead: LookaheadQueue::default(),
            keywords: config.keywords(),
            failure: None,
            stalled: None,
            exhausted: false,
        }
    }

    /// Returns the next token.
    ///
    /// After the source is exhausted every call returns an end-of-input
    /// token. After a fatal error every call returns that error again.
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        match self.transform() {
            Ok(token) => Ok(token),
            Err(err) => {
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Scans every remaining token, up to and including end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use toyc_lex::{LexConfig, Lexer};
    ///
    /// let config = LexConfig::default();
    /// let tokens = Lexer::new("  \n\t ", &config).read_all().unwrap();
    /// assert_eq!(tokens.len(), 1);
    /// assert!(tokens[0].is_eof());
    /// ```
    pub fn read_all(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }

    /// The current machine state.
    pub fn state(&self) -> State {
        self.engine.state()
    }

    /// The line of the next character to scan (1-based).
    pub fn line(&self) -> u32 {
        self.engine.cursor.line()
    }

    /// The column of the next character to scan (1-based).
    pub fn column(&self) -> u32 {
        self.engine.cursor.column()
    }

    /// Number of raw units scanned ahead and not yet returned.
    pub fn pending(&self) -> usize {
        self.lookahead.len()
    }

    /// Takes one raw unit: queued units first, fresh scanning after.
    pub(super) fn next_raw(&mut self) -> Result<Token> {
        if let Some(token) = self.lookahead.pop() {
            return Ok(token);
        }
        match self.stalled.take() {
            Some(err) => Err(err),
            None => self.engine.scan(),
        }
    }

    fn transform(&mut self) -> Result<Token> {
        let token = self.next_raw()?;
        match token.kind() {
            TokenKind::Identifier => Ok(self.promote_keyword(token)),
            TokenKind::IntegerLiteral => self.fuse_real(token),
            _ => Ok(token),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    /// Yields tokens up to, but not including, end of input. A fatal error
    /// is yielded once and ends iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DotPolicy;

    fn lex_tokens(source: &str) -> Vec<Token> {
        let config = LexConfig::default();
        let mut lexer = Lexer::new(source, &config);
        lexer.read_all().unwrap()
    }

    #[test]
    fn test_read_all_ends_with_eof() {
        let tokens = lex_tokens("a b");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_read_all_after_exhaustion_returns_only_eof() {
        let config = LexConfig::default();
        let mut lexer = Lexer::new("a", &config);
        assert_eq!(lexer.read_all().unwrap().len(), 2);
        let again = lexer.read_all().unwrap();
        assert_eq!(again.len(), 1);
        assert!(again[0].is_eof());
    }

    #[test]
    fn test_terminal_idempotence() {
        let config = LexConfig::default();
        let mut lexer = Lexer::new("42", &config);
        assert_eq!(lexer.next_token().unwrap().lexeme(), "42");
        let first_eof = lexer.next_token().unwrap();
        assert!(first_eof.is_eof());
        for _ in 0..5 {
            assert_eq!(lexer.next_token().unwrap(), first_eof);
        }
        assert_eq!(lexer.state(), State::AtEndOfInput);
    }

    #[test]
    fn test_error_is_sticky() {
        let config = LexConfig::default();
        let mut lexer = Lexer::new("a @ b", &config);
        assert_eq!(lexer.next_token().unwrap().lexeme(), "a");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::InvalidCharacter { ch: '@', .. }));
        assert_eq!(lexer.next_token().unwrap_err(), err);
        assert_eq!(lexer.next_token().unwrap_err(), err);
    }

    #[test]
    fn test_read_all_rejects_whole_input() {
        let config = LexConfig::default();
        let result = Lexer::new("int x = 1; x = x & 2;", &config).read_all();
        assert!(matches!(
            result,
            Err(LexError::InvalidCharacter { ch: '&', .. })
        ));
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let config = LexConfig::default();
        let lexemes: Vec<String> = Lexer::new("do x doend", &config)
            .map(|t| t.unwrap().lexeme().to_string())
            .collect();
        assert_eq!(lexemes, ["do", "x", "doend"]);
    }

    #[test]
    fn test_iterator_yields_error_once() {
        let config = LexConfig::default();
        let items: Vec<_> = Lexer::new("a # b", &config).collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_line_and_column_follow_scanning() {
        let config = LexConfig::default();
        let mut lexer = Lexer::new("a\n  b", &config);
        assert_eq!((lexer.line(), lexer.column()), (1, 1));
        lexer.next_token().unwrap();
        // The newline that ended `a` has not been consumed yet.
        assert_eq!((lexer.line(), lexer.column()), (1, 2));
        lexer.next_token().unwrap();
        assert_eq!((lexer.line(), lexer.column()), (2, 4));
    }

    #[test]
    fn test_strict_policy_rejects_trailing_dot() {
        let config = LexConfig::new(DotPolicy::Strict);
        let err = Lexer::new("123.", &config).read_all().unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter {
                ch: None,
                state: State::InIntegerDot,
                ..
            }
        ));
    }

    #[test]
    fn test_custom_keywords() {
        let config = LexConfig::default().with_keywords(KeywordSet::new(["begin"]));
        let tokens = Lexer::new("begin while", &config).read_all().unwrap();
        assert!(tokens[0].is(TokenKind::Keyword, "begin"));
        assert!(tokens[1].is(TokenKind::Identifier, "while"));
    }
}
