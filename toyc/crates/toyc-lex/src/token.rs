//! Token definitions.
//!
//! A [`Token`] is an immutable `(kind, lexeme)` pair plus the [`Span`] it was
//! scanned from. The lexeme is always the verbatim source text; it is never
//! normalized or case-folded.

use std::fmt;

use rustc_hash::FxHashSet;
use toyc_util::Span;

/// The category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name that is not a keyword
    Identifier,
    /// A reserved word from the [`KeywordSet`]
    Keyword,
    /// Decimal digits, e.g. `42`
    IntegerLiteral,
    /// Digits, a dot and digits, e.g. `3.14`
    RealLiteral,
    /// A single operator character
    Operator,
    /// A single separator character
    Separator,
    /// The end of the source
    EndOfInput,
}

impl TokenKind {
    /// Name used in the `[Type: ..., Lexeme: '...']` rendering.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::IntegerLiteral => "Integer",
            TokenKind::RealLiteral => "Real",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::EndOfInput => "EndOfFile",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scanned token.
///
/// # Example
///
/// ```
/// use toyc_lex::{Token, TokenKind};
/// use toyc_util::Span;
///
/// let token = Token::new(TokenKind::Keyword, "while", Span::new(0, 5, 1, 1));
/// assert_eq!(token.to_string(), "[Type: Keyword, Lexeme: 'while']");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The verbatim source text of the token.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Where the token was scanned from.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns true if this token has the given kind and lexeme.
    pub fn is(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.kind == kind && self.lexeme == lexeme
    }

    /// Consumes the token, returning one with a different kind and the same
    /// lexeme and span.
    pub(crate) fn with_kind(self, kind: TokenKind) -> Self {
        Self { kind, ..self }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Type: {}, Lexeme: '{}']", self.kind, self.lexeme)
    }
}

/// Reserved words of the language.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "int", "float", "bool", "if", "else", "then", "endif", "while", "whileend", "do", "doend",
    "for", "forend", "input", "output", "and", "or", "function",
];

/// A fixed, case-sensitive set of reserved identifier spellings.
///
/// # Example
///
/// ```
/// use toyc_lex::KeywordSet;
///
/// let keywords = KeywordSet::default();
/// assert!(keywords.contains("while"));
/// assert!(!keywords.contains("While"));
///
/// let custom = KeywordSet::new(["let", "fn"]);
/// assert!(custom.contains("fn"));
/// assert!(!custom.contains("while"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<String>,
}

impl KeywordSet {
    /// Builds a keyword set from the given spellings.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `word` is reserved. Matching is case-sensitive.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are reserved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
