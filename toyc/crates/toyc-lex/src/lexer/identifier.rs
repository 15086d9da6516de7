//! Keyword promotion.

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Reclassifies an identifier as a keyword if its lexeme is reserved.
    ///
    /// Matching is exact and case-sensitive: `While` stays an identifier.
    pub(super) fn promote_keyword(&self, token: Token) -> Token {
        debug_assert_eq!(token.kind(), TokenKind::Identifier);

        if self.keywords.contains(token.lexeme()) {
            token.with_kind(TokenKind::Keyword)
        } else {
            token
        }
    }
}
