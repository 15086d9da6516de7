//! Scanner configuration.
//!
//! A [`LexConfig`] is built once and borrowed by every [`Lexer`] created
//! from it, so the keyword set and transition table are shared read-only
//! data rather than process-wide globals.
//!
//! [`Lexer`]: crate::Lexer

use crate::state::{DotPolicy, TransitionTable};
use crate::token::KeywordSet;

/// Immutable configuration for the scanner.
///
/// # Example
///
/// ```
/// use toyc_lex::{DotPolicy, KeywordSet, LexConfig};
///
/// let config = LexConfig::new(DotPolicy::Strict).with_keywords(KeywordSet::new(["begin", "end"]));
/// assert_eq!(config.dot_policy(), DotPolicy::Strict);
/// assert!(config.keywords().contains("begin"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexConfig {
    keywords: KeywordSet,
    table: TransitionTable,
}

impl LexConfig {
    /// Default keywords with the given dot policy.
    pub fn new(dot_policy: DotPolicy) -> Self {
        Self {
            keywords: KeywordSet::default(),
            table: TransitionTable::new(dot_policy),
        }
    }

    /// Replaces the keyword set.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// The reserved words.
    #[inline]
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// The transition table.
    #[inline]
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// How `<digits>.` without a fraction is treated.
    #[inline]
    pub fn dot_policy(&self) -> DotPolicy {
        self.table.dot_policy()
    }
}

impl Default for LexConfig {
    fn default() -> Self {
        Self::new(DotPolicy::default())
    }
}
