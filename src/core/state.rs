//! State tokens and terminal-state sets.
//!
//! States are opaque identifiers. The engine reserves two tokens: [`NONE`],
//! the pre-bootstrap state every machine starts in, and [`WILDCARD`], which
//! stands for "any source state" in event declarations.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Reserved state a machine occupies before its initial transition fires.
pub const NONE: &str = "none";

/// Source token matching any state not explicitly mapped for an event.
pub const WILDCARD: &str = "*";

/// Opaque state identifier.
///
/// Static names are stored without allocating, so states declared in code
/// are cheap to clone.
///
/// # Example
///
/// ```rust
/// use signalfsm::core::State;
///
/// let locked = State::from("locked");
/// assert_eq!(locked.as_str(), "locked");
/// assert_eq!(locked, "locked");
/// assert!(State::NONE.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(Cow<'static, str>);

impl State {
    /// The reserved pre-bootstrap state.
    pub const NONE: State = State(Cow::Borrowed(NONE));

    /// Create a state from any string-like name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        State(name.into())
    }

    /// The state's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the reserved pre-bootstrap state.
    pub fn is_none(&self) -> bool {
        self.0 == NONE
    }

    /// Whether this token is the wildcard source.
    pub fn is_wildcard(&self) -> bool {
        self.0 == WILDCARD
    }
}

impl From<&'static str> for State {
    fn from(name: &'static str) -> Self {
        State(Cow::Borrowed(name))
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        State(Cow::Owned(name))
    }
}

impl From<&State> for State {
    fn from(state: &State) -> Self {
        state.clone()
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for State {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The state or states in which a machine counts as finished.
///
/// Deserializes from either a single state name or a list of names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Terminal {
    One(State),
    Many(Vec<State>),
}

impl Terminal {
    /// Whether `state` is terminal.
    pub fn contains(&self, state: &State) -> bool {
        match self {
            Terminal::One(terminal) => terminal == state,
            Terminal::Many(terminals) => terminals.contains(state),
        }
    }
}

impl From<&'static str> for Terminal {
    fn from(name: &'static str) -> Self {
        Terminal::One(State::from(name))
    }
}

impl From<State> for Terminal {
    fn from(state: State) -> Self {
        Terminal::One(state)
    }
}

impl<S: Into<State>> From<Vec<S>> for Terminal {
    fn from(states: Vec<S>) -> Self {
        Terminal::Many(states.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<State>, const N: usize> From<[S; N]> for Terminal {
    fn from(states: [S; N]) -> Self {
        Terminal::Many(states.into_iter().map(Into::into).collect())
    }
}
