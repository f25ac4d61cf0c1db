//! Event declarations and the compiled transition map.
//!
//! A declaration names an event, the states it may fire from, and the state
//! it leads to. [`TransitionMap::add`] compiles declarations into a lookup of
//! `event -> source -> destination`. Declarations are applied in order and a
//! later declaration for the same `(event, source)` pair replaces the earlier
//! one, which is how callers redeclare a transition.

use super::state::State;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Source side of a transition map entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// Matches any state without an explicit entry
    Any,
    State(State),
}

impl From<State> for Source {
    fn from(state: State) -> Self {
        if state.is_wildcard() {
            Source::Any
        } else {
            Source::State(state)
        }
    }
}

/// Declarative description of one event.
///
/// `from` empty means the wildcard source. `to` absent means a declared
/// no-op: each source leads back to itself.
///
/// # Example
///
/// ```rust
/// use signalfsm::core::EventDecl;
///
/// let unlock = EventDecl::new("unlock").from("locked").to("unlocked");
/// let reset = EventDecl::new("reset").to("locked"); // from any state
/// let poke = EventDecl::new("poke").from("locked").from("unlocked"); // no-op
/// # let _ = (unlock, reset, poke);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDecl {
    pub name: String,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "one_or_many"
    )]
    pub from: Vec<State>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<State>,
}

impl EventDecl {
    /// Start a declaration for the named event.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: Vec::new(),
            to: None,
        }
    }

    /// Add a source state.
    pub fn from(mut self, state: impl Into<State>) -> Self {
        self.from.push(state.into());
        self
    }

    /// Add several source states.
    pub fn from_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.from.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the destination state.
    pub fn to(mut self, state: impl Into<State>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Source entries this declaration writes.
    pub fn sources(&self) -> Vec<Source> {
        if self.from.is_empty() {
            vec![Source::Any]
        } else {
            self.from.iter().cloned().map(Source::from).collect()
        }
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<State>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(State),
        Many(Vec<State>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(state) => vec![state],
        OneOrMany::Many(states) => states,
    })
}

#[derive(Clone, Debug, PartialEq)]
enum Target {
    /// Declared no-op from the wildcard: stay wherever the machine is
    Stay,
    State(State),
}

/// Compiled lookup of `event -> source -> destination`.
#[derive(Clone, Debug, Default)]
pub struct TransitionMap {
    events: HashMap<String, HashMap<Source, Target>>,
    order: Vec<String>,
}

impl TransitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every `(name, source)` pair of the declaration, replacing
    /// existing entries.
    pub fn add(&mut self, decl: &EventDecl) {
        if !self.events.contains_key(&decl.name) {
            self.order.push(decl.name.clone());
        }
        let entries = self.events.entry(decl.name.clone()).or_default();

        for source in decl.sources() {
            let target = match (&decl.to, &source) {
                (Some(to), _) => Target::State(to.clone()),
                (None, Source::State(from)) => Target::State(from.clone()),
                (None, Source::Any) => Target::Stay,
            };
            entries.insert(source, target);
        }
    }

    /// Whether the event has been declared at all.
    pub fn contains_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Whether an exact or wildcard entry exists for `(event, from)`.
    pub fn has_mapping(&self, event: &str, from: &State) -> bool {
        self.events.get(event).is_some_and(|entries| {
            entries.contains_key(&Source::State(from.clone())) || entries.contains_key(&Source::Any)
        })
    }

    /// Destination of `event` fired from `from`.
    ///
    /// Resolution order is the exact entry, then the wildcard entry, then
    /// `from` itself.
    pub fn resolve(&self, event: &str, from: &State) -> State {
        let Some(entries) = self.events.get(event) else {
            return from.clone();
        };

        let target = entries
            .get(&Source::State(from.clone()))
            .or_else(|| entries.get(&Source::Any));

        match target {
            Some(Target::State(to)) => to.clone(),
            Some(Target::Stay) | None => from.clone(),
        }
    }

    /// Declared event names, in first-declaration order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
