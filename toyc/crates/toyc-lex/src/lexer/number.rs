//! Real-number fusion.
//!
//! The FSM already scans `12.5` as one real literal. Fusion also joins an
//! integer, a `.` separator and a second integer that reached the emitter as
//! separate units, as happens with `12. 5` or `12 . 5`.

use tracing::debug;

use super::core::Lexer;
use crate::error::Result;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Tries to fuse `int` with the next two raw units into a real literal.
    ///
    /// Units that do not fuse are queued, in scan order, ahead of anything
    /// else pending. A scan error while looking ahead is held back until the
    /// queued units have been returned, so `int` itself is never lost.
    pub(super) fn fuse_real(&mut self, int: Token) -> Result<Token> {
        debug_assert_eq!(int.kind(), TokenKind::IntegerLiteral);

        let dot = match self.lookahead_unit() {
            Some(unit) => unit,
            None => return Ok(int),
        };
        if !dot.is(TokenKind::Separator, ".") {
            self.lookahead.unread(dot);
            return Ok(int);
        }

        let frac = match self.lookahead_unit() {
            Some(unit) => unit,
            None => {
                self.lookahead.unread(dot);
                return Ok(int);
            }
        };
        if frac.kind() != TokenKind::IntegerLiteral {
            debug!(int = int.lexeme(), next = %frac, "no fraction after dot, not fusing");
            self.lookahead.unread(frac);
            self.lookahead.unread(dot);
            return Ok(int);
        }

        let lexeme = format!("{}.{}", int.lexeme(), frac.lexeme());
        let span = int.span().to(frac.span());
        debug!(lexeme = %lexeme, at = %span, "fused real literal");
        Ok(Token::new(TokenKind::RealLiteral, lexeme, span))
    }

    /// Pulls one raw unit for fusion, parking a scan error for later.
    fn lookahead_unit(&mut self) -> Option<Token> {
        match self.next_raw() {
            Ok(token) => Some(token),
            Err(err) => {
                self.stalled = Some(err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{DotPolicy, LexConfig, LexError, Lexer, TokenKind};
    use toyc_util::Span;

    fn lex_pairs(source: &str) -> Vec<(TokenKind, String)> {
        let config = LexConfig::default();
        Lexer::new(source, &config)
            .read_all()
            .unwrap()
            .into_iter()
            .map(|t| (t.kind(), t.lexeme().to_string()))
            .collect()
    }

    fn pair(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
        (kind, lexeme.to_string())
    }

    #[test]
    fn test_integer_alone() {
        assert_eq!(
            lex_pairs("123"),
            [pair(TokenKind::IntegerLiteral, "123"), pair(TokenKind::EndOfInput, "")]
        );
    }

    #[test]
    fn test_real_literal() {
        assert_eq!(
            lex_pairs("123.45"),
            [pair(TokenKind::RealLiteral, "123.45"), pair(TokenKind::EndOfInput, "")]
        );
    }

    #[test]
    fn test_comma_is_not_fused() {
        assert_eq!(
            lex_pairs("5,6"),
            [
                pair(TokenKind::IntegerLiteral, "5"),
                pair(TokenKind::Separator, ","),
                pair(TokenKind::IntegerLiteral, "6"),
                pair(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(
            lex_pairs("123."),
            [
                pair(TokenKind::IntegerLiteral, "123"),
                pair(TokenKind::Separator, "."),
                pair(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_spaced_dot_fuses() {
        assert_eq!(
            lex_pairs("1 . 2"),
            [pair(TokenKind::RealLiteral, "1.2"), pair(TokenKind::EndOfInput, "")]
        );
        assert_eq!(lex_pairs("123. 45")[0], pair(TokenKind::RealLiteral, "123.45"));
    }

    #[test]
    fn test_fused_real_span() {
        let config = LexConfig::default();
        let token = Lexer::new(" 1 . 25", &config).next_token().unwrap();
        assert_eq!(token.span(), Span::new(1, 7, 1, 2));
    }

    #[test]
    fn test_second_dot_is_separator() {
        assert_eq!(
            lex_pairs("5.6.7"),
            [
                pair(TokenKind::RealLiteral, "5.6"),
                pair(TokenKind::Separator, "."),
                pair(TokenKind::IntegerLiteral, "7"),
                pair(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_dot_then_identifier_keeps_order() {
        assert_eq!(
            lex_pairs("3 . x"),
            [
                pair(TokenKind::IntegerLiteral, "3"),
                pair(TokenKind::Separator, "."),
                pair(TokenKind::Identifier, "x"),
                pair(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_double_dot() {
        assert_eq!(
            lex_pairs("5..6"),
            [
                pair(TokenKind::IntegerLiteral, "5"),
                pair(TokenKind::Separator, "."),
                pair(TokenKind::Separator, "."),
                pair(TokenKind::IntegerLiteral, "6"),
                pair(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_queued_units_drain_before_scanning() {
        let config = LexConfig::default();
        let mut lexer = Lexer::new("4 . y z", &config);
        assert_eq!(lexer.next_token().unwrap().lexeme(), "4");
        assert_eq!(lexer.pending(), 2);
        assert_eq!(lexer.next_token().unwrap().lexeme(), ".");
        assert_eq!(lexer.next_token().unwrap().lexeme(), "y");
        assert_eq!(lexer.pending(), 0);
        assert_eq!(lexer.next_token().unwrap().lexeme(), "z");
    }

    #[test]
    fn test_lookahead_error_after_integer() {
        let config = LexConfig::default();
        let mut lexer = Lexer::new("7 @", &config);
        assert_eq!(lexer.next_token().unwrap().lexeme(), "7");
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err, LexError::InvalidCharacter { ch: '@', .. }));
        assert_eq!(lexer.next_token().unwrap_err(), err);
    }

    #[test]
    fn test_lookahead_error_after_dot() {
        let config = LexConfig::default();
        let mut lexer = Lexer::new("7 . #", &config);
        assert_eq!(lexer.next_token().unwrap().lexeme(), "7");
        assert_eq!(lexer.next_token().unwrap().lexeme(), ".");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn test_strict_policy_still_fuses_spaced_dot() {
        let config = LexConfig::new(DotPolicy::Strict);
        let tokens = Lexer::new("1 .5", &config).read_all().unwrap();
        assert!(tokens[0].is(TokenKind::RealLiteral, "1.5"));
    }
}
