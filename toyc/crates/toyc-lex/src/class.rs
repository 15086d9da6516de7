//! Character classification.
//!
//! The transition table is indexed by character class rather than by raw
//! character, so every input character (and the end-of-input sentinel) is
//! first mapped to exactly one [`CharClass`].

use std::fmt;

/// The class of one input character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII `A-Z` and `a-z`
    Letter,
    /// ASCII `0-9`
    Digit,
    /// `$`
    CurrencySymbol,
    /// `.`
    Dot,
    /// `!`, starts a line comment
    CommentMarker,
    /// `+ - * / % = < >`
    OperatorSymbol,
    /// `( ) { } [ ] , : ; '`
    SeparatorSymbol,
    /// Space, tab, carriage return and line feed
    Whitespace,
    /// The end-of-input sentinel
    EndOfInput,
}

impl CharClass {
    /// Number of character classes.
    pub const COUNT: usize = 9;

    /// Every class, in table column order.
    pub const ALL: [CharClass; CharClass::COUNT] = [
        CharClass::Letter,
        CharClass::Digit,
        CharClass::CurrencySymbol,
        CharClass::Dot,
        CharClass::CommentMarker,
        CharClass::OperatorSymbol,
        CharClass::SeparatorSymbol,
        CharClass::Whitespace,
        CharClass::EndOfInput,
    ];

    /// Column of this class in the transition table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Letter => "letter",
            CharClass::Digit => "digit",
            CharClass::CurrencySymbol => "currency symbol",
            CharClass::Dot => "dot",
            CharClass::CommentMarker => "comment marker",
            CharClass::OperatorSymbol => "operator",
            CharClass::SeparatorSymbol => "separator",
            CharClass::Whitespace => "whitespace",
            CharClass::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// Classifies one character; `None` is the end-of-input sentinel.
///
/// Returns the character itself as the error when it lies outside the
/// language alphabet.
///
/// # Example
///
/// ```
/// use toyc_lex::{classify, CharClass};
///
/// assert_eq!(classify(Some('x')), Ok(CharClass::Letter));
/// assert_eq!(classify(Some('.')), Ok(CharClass::Dot));
/// assert_eq!(classify(None), Ok(CharClass::EndOfInput));
/// assert_eq!(classify(Some('_')), Err('_'));
/// ```
pub fn classify(ch: Option<char>) -> Result<CharClass, char> {
    let Some(c) = ch else {
        return Ok(CharClass::EndOfInput);
    };

    match c {
        'A'..='Z' | 'a'..='z' => Ok(CharClass::Letter),
        '0'..='9' => Ok(CharClass::Digit),
        '$' => Ok(CharClass::CurrencySymbol),
        '.' => Ok(CharClass::Dot),
        '!' => Ok(CharClass::CommentMarker),
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' => Ok(CharClass::OperatorSymbol),
        '(' | ')' | '{' | '}' | '[' | ']' | ',' | ':' | ';' | '\'' => {
            Ok(CharClass::SeparatorSymbol)
        }
        ' ' | '\t' | '\r' | '\n' => Ok(CharClass::Whitespace),
        other => Err(other),
    }
}

/// Returns true for the characters that end a line comment.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}
