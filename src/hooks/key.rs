//! Hook keys published during a transition.

use crate::core::State;
use std::fmt;
use std::str::FromStr;

/// A hook the engine publishes while dispatching an event.
///
/// The `Display` form is the canonical string name, e.g. `before:unlock`,
/// `leaveState` or `enter:unlocked`. Parsing accepts the same names; any
/// string that is not one of the generic names and carries no known prefix
/// is read as [`HookKey::Event`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HookKey {
    /// Before the named event, may veto
    Before(String),
    /// Before any event, may veto
    BeforeEvent,
    /// Leaving the named state, may veto or defer
    Leave(State),
    /// Leaving any state, may veto or defer
    LeaveState,
    /// The named event committed
    Event(String),
    /// Entered the named state
    Enter(State),
    /// Entered any state
    EnterState,
    /// The current state changed
    ChangeState,
    /// After the named event
    After(String),
    /// After any event
    AfterEvent,
}

impl HookKey {
    pub fn before(event: impl Into<String>) -> Self {
        HookKey::Before(event.into())
    }

    pub fn leave(state: impl Into<State>) -> Self {
        HookKey::Leave(state.into())
    }

    pub fn event(event: impl Into<String>) -> Self {
        HookKey::Event(event.into())
    }

    pub fn enter(state: impl Into<State>) -> Self {
        HookKey::Enter(state.into())
    }

    pub fn after(event: impl Into<String>) -> Self {
        HookKey::After(event.into())
    }
}

impl fmt::Display for HookKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKey::Before(event) => write!(f, "before:{event}"),
            HookKey::BeforeEvent => f.write_str("beforeEvent"),
            HookKey::Leave(state) => write!(f, "leave:{state}"),
            HookKey::LeaveState => f.write_str("leaveState"),
            HookKey::Event(event) => f.write_str(event),
            HookKey::Enter(state) => write!(f, "enter:{state}"),
            HookKey::EnterState => f.write_str("enterState"),
            HookKey::ChangeState => f.write_str("changeState"),
            HookKey::After(event) => write!(f, "after:{event}"),
            HookKey::AfterEvent => f.write_str("afterEvent"),
        }
    }
}

impl FromStr for HookKey {
    type Err = std::convert::Infallible;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let parsed = match key {
            "beforeEvent" => HookKey::BeforeEvent,
            "leaveState" => HookKey::LeaveState,
            "enterState" => HookKey::EnterState,
            "changeState" => HookKey::ChangeState,
            "afterEvent" => HookKey::AfterEvent,
            _ => match key.split_once(':') {
                Some(("before", event)) => HookKey::before(event.to_string()),
                Some(("leave", state)) => HookKey::leave(state.to_string()),
                Some(("enter", state)) => HookKey::enter(state.to_string()),
                Some(("after", event)) => HookKey::after(event.to_string()),
                _ => HookKey::event(key.to_string()),
            },
        };
        Ok(parsed)
    }
}
