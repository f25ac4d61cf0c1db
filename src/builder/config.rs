//! Serializable machine configuration.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::{EventDecl, State, Terminal};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Event fired to leave `none` when none is named.
pub const DEFAULT_STARTUP_EVENT: &str = "startup";

/// Where a machine starts and how it gets there.
///
/// Deserializes from a bare state name or from
/// `{ "state": .., "event": .., "defer": .. }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "InitialRepr")]
pub struct Initial {
    pub state: State,

    /// Event that moves the machine out of `none`
    pub event: String,

    /// Leave the initial event for the caller to fire
    pub defer: bool,
}

impl Initial {
    pub fn new(state: impl Into<State>) -> Self {
        Self {
            state: state.into(),
            event: DEFAULT_STARTUP_EVENT.to_string(),
            defer: false,
        }
    }

    /// Name the bootstrap event.
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Do not fire the bootstrap event at build time.
    pub fn deferred(mut self) -> Self {
        self.defer = true;
        self
    }
}

impl From<&'static str> for Initial {
    fn from(state: &'static str) -> Self {
        Initial::new(state)
    }
}

impl From<String> for Initial {
    fn from(state: String) -> Self {
        Initial::new(state)
    }
}

impl From<State> for Initial {
    fn from(state: State) -> Self {
        Initial::new(state)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InitialRepr {
    Name(State),
    Detailed {
        state: State,
        #[serde(default)]
        event: Option<String>,
        #[serde(default)]
        defer: bool,
    },
}

impl From<InitialRepr> for Initial {
    fn from(repr: InitialRepr) -> Self {
        match repr {
            InitialRepr::Name(state) => Initial::new(state),
            InitialRepr::Detailed {
                state,
                event,
                defer,
            } => Initial {
                state,
                event: event.unwrap_or_else(|| DEFAULT_STARTUP_EVENT.to_string()),
                defer,
            },
        }
    }
}

/// Declarative machine configuration.
///
/// The error policy and hook bus are not part of the serialized form; set
/// them on the [`StateMachineBuilder`](super::StateMachineBuilder).
///
/// # Example
///
/// ```rust
/// use signalfsm::builder::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{
///     "initial": "locked",
///     "events": [
///         { "name": "unlock", "from": "locked", "to": "unlocked" },
///         { "name": "lock", "from": "unlocked", "to": "locked" }
///     ],
///     "final": "locked"
/// }"#).unwrap();
///
/// assert_eq!(config.events.len(), 2);
/// assert!(config.terminal.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<Initial>,

    #[serde(default)]
    pub events: Vec<EventDecl>,

    #[serde(default, alias = "final", skip_serializing_if = "Option::is_none")]
    pub terminal: Option<Terminal>,
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if let Some(initial) = &self.initial {
            checks.push(require(!initial.state.is_none(), || {
                ConfigViolation::ReservedInitialState
            }));
            checks.push(require(!initial.state.as_str().is_empty(), || {
                ConfigViolation::EmptyInitialState
            }));
            checks.push(require(!initial.event.is_empty(), || {
                ConfigViolation::EmptyEventName
            }));
        }

        for decl in &self.events {
            checks.push(require(!decl.name.is_empty(), || {
                ConfigViolation::EmptyEventName
            }));

            let empty_state = decl
                .from
                .iter()
                .chain(decl.to.iter())
                .any(|state| state.as_str().is_empty());
            checks.push(require(!empty_state, || ConfigViolation::EmptyStateName {
                event: decl.name.clone(),
            }));

            let reaches_none = match &decl.to {
                Some(to) => to.is_none(),
                None => decl.from.iter().any(State::is_none),
            };
            checks.push(require(!reaches_none, || {
                ConfigViolation::ReservedDestination {
                    event: decl.name.clone(),
                }
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn require<F>(holds: bool, violation: F) -> Validation<(), NonEmptyVec<ConfigViolation>>
where
    F: FnOnce() -> ConfigViolation,
{
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}
