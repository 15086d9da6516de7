//! FSM states and the transition table.
//!
//! The table maps every `(State, CharClass)` pair to either a next state or
//! [`Transition::Invalid`]. It is built once from a [`DotPolicy`] by an
//! exhaustive match with no wildcard arms, so adding a state or a class is a
//! compile error until every new pair is given an entry.
//!
//! Landing on [`State::Idle`] from any other state is an *acceptance*: the
//! scan engine packages the buffered lexeme as a token of the kind returned
//! by [`State::token_kind`] and reprocesses the triggering character.
//!
//! Comment bodies never reach the table. The scan engine skips them up to
//! the next CR or LF, or the end of input, and only that terminator is
//! stepped from [`State::InComment`]. Because CR and LF classify as
//! whitespace, the `InComment` row sends whitespace and end of input to
//! [`State::CommentEnding`]; its remaining entries cover characters the
//! skipper has already consumed.

use std::fmt;

use crate::class::CharClass;
use crate::token::TokenKind;

/// A state of the scanning machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Between tokens; the initial state
    Idle,
    /// Inside an identifier
    InIdentifier,
    /// Inside the digits of an integer
    InInteger,
    /// After `<digits>.`, waiting to see whether a fraction follows
    InIntegerDot,
    /// Inside the fraction digits of a real number
    InReal,
    /// After a single operator character
    InOperator,
    /// After a single separator character
    InSeparator,
    /// Inside a line comment
    InComment,
    /// A line comment has just ended
    CommentEnding,
    /// The source is exhausted; absorbing
    AtEndOfInput,
}

impl State {
    /// Number of states (the `Invalid` sentinel is a [`Transition`], not a state).
    pub const COUNT: usize = 10;

    /// Every state, in table row order.
    pub const ALL: [State; State::COUNT] = [
        State::Idle,
        State::InIdentifier,
        State::InInteger,
        State::InIntegerDot,
        State::InReal,
        State::InOperator,
        State::InSeparator,
        State::InComment,
        State::CommentEnding,
        State::AtEndOfInput,
    ];

    /// Row of this state in the transition table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The kind of token accepted when the machine leaves this state for
    /// `Idle`, or `None` when leaving it produces no token.
    ///
    /// `InIntegerDot` reports `IntegerLiteral`: under
    /// [`DotPolicy::Fallback`] its buffered `<digits>.` is split into an
    /// integer and a `.` separator.
    pub const fn token_kind(self) -> Option<TokenKind> {
        match self {
            State::InIdentifier => Some(TokenKind::Identifier),
            State::InInteger | State::InIntegerDot => Some(TokenKind::IntegerLiteral),
            State::InReal => Some(TokenKind::RealLiteral),
            State::InOperator => Some(TokenKind::Operator),
            State::InSeparator => Some(TokenKind::Separator),
            State::AtEndOfInput => Some(TokenKind::EndOfInput),
            State::Idle | State::InComment | State::CommentEnding => None,
        }
    }

    /// Whether characters are appended to the lexeme when entering this state.
    pub const fn is_content_bearing(self) -> bool {
        match self {
            State::InIdentifier
            | State::InInteger
            | State::InIntegerDot
            | State::InReal
            | State::InOperator
            | State::InSeparator => true,
            State::Idle | State::InComment | State::CommentEnding | State::AtEndOfInput => false,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One entry of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Move to the given state
    To(State),
    /// No transition is defined; scanning fails
    Invalid,
}

/// How `<digits>.` followed by a non-digit is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DotPolicy {
    /// Accept the integer and emit the dot as a separate `.` separator.
    #[default]
    Fallback,
    /// Reject the input with an unexpected-character error.
    Strict,
}

/// The immutable `(State, CharClass) -> Transition` mapping.
///
/// # Example
///
/// ```
/// use toyc_lex::{CharClass, DotPolicy, State, Transition, TransitionTable};
///
/// let table = TransitionTable::new(DotPolicy::Strict);
/// assert_eq!(
///     table.step(State::Idle, CharClass::Digit),
///     Transition::To(State::InInteger)
/// );
/// assert_eq!(
///     table.step(State::InIntegerDot, CharClass::Whitespace),
///     Transition::Invalid
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    entries: [[Transition; CharClass::COUNT]; State::COUNT],
    dot_policy: DotPolicy,
}

impl TransitionTable {
    /// Builds the table for the given dot policy.
    pub fn new(dot_policy: DotPolicy) -> Self {
        let mut entries = [[Transition::Invalid; CharClass::COUNT]; State::COUNT];
        for state in State::ALL {
            for class in CharClass::ALL {
                entries[state.index()][class.index()] = rule(state, class, dot_policy);
            }
        }
        Self {
            entries,
            dot_policy,
        }
    }

    /// Looks up the transition for `state` on a character of `class`.
    #[inline]
    pub fn step(&self, state: State, class: CharClass) -> Transition {
        self.entries[state.index()][class.index()]
    }

    /// The dot policy this table was built with.
    #[inline]
    pub fn dot_policy(&self) -> DotPolicy {
        self.dot_policy
    }

    /// Iterates over every `(state, class, transition)` entry.
    pub fn entries(&self) -> impl Iterator<Item = (State, CharClass, Transition)> + '_ {
        State::ALL.into_iter().flat_map(move |state| {
            CharClass::ALL
                .into_iter()
                .map(move |class| (state, class, self.step(state, class)))
        })
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new(DotPolicy::default())
    }
}

fn rule(state: State, class: CharClass, dot_policy: DotPolicy) -> Transition {
    use CharClass::*;
    use Transition::{Invalid, To};

    match state {
        State::Idle => match class {
            Letter => To(State::InIdentifier),
            Digit => To(State::InInteger),
            CurrencySymbol => Invalid,
            Dot => To(State::InSeparator),
            CommentMarker => To(State::InComment),
            OperatorSymbol => To(State::InOperator),
            SeparatorSymbol => To(State::InSeparator),
            Whitespace => To(State::Idle),
            EndOfInput => To(State::AtEndOfInput),
        },
        State::InIdentifier => match class {
            Letter | Digit | CurrencySymbol => To(State::InIdentifier),
            Dot | CommentMarker | OperatorSymbol | SeparatorSymbol | Whitespace | EndOfInput => {
                To(State::Idle)
            }
        },
        State::InInteger => match class {
            Digit => To(State::InInteger),
            Dot => To(State::InIntegerDot),
            Letter | CurrencySymbol | CommentMarker | OperatorSymbol | SeparatorSymbol
            | Whitespace | EndOfInput => To(State::Idle),
        },
        State::InIntegerDot => match class {
            Digit => To(State::InReal),
            Letter | CurrencySymbol | Dot | CommentMarker | OperatorSymbol | SeparatorSymbol
            | Whitespace | EndOfInput => match dot_policy {
                DotPolicy::Fallback => To(State::Idle),
                DotPolicy::Strict => Invalid,
            },
        },
        State::InReal => match class {
            Digit => To(State::InReal),
            Letter | CurrencySymbol | Dot | CommentMarker | OperatorSymbol | SeparatorSymbol
            | Whitespace | EndOfInput => To(State::Idle),
        },
        State::InOperator | State::InSeparator => match class {
            Letter | Digit | CurrencySymbol | Dot | CommentMarker | OperatorSymbol
            | SeparatorSymbol | Whitespace | EndOfInput => To(State::Idle),
        },
        State::InComment => match class {
            Whitespace | EndOfInput => To(State::CommentEnding),
            Letter | Digit | CurrencySymbol | Dot | CommentMarker | OperatorSymbol
            | SeparatorSymbol => To(State::InComment),
        },
        State::CommentEnding => match class {
            Letter | Digit | CurrencySymbol | Dot | CommentMarker | OperatorSymbol
            | SeparatorSymbol | Whitespace | EndOfInput => To(State::Idle),
        },
        State::AtEndOfInput => match class {
            Letter | Digit | CurrencySymbol | Dot | CommentMarker | OperatorSymbol
            | SeparatorSymbol | Whitespace | EndOfInput => To(State::AtEndOfInput),
        },
    }
}
