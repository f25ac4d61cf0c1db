//! Builder for constructing state machines.

use crate::builder::config::{Initial, MachineConfig};
use crate::builder::error::BuildError;
use crate::core::{EventDecl, State, Terminal, TransitionMap};
use crate::hooks::{EventBus, HookBus};
use crate::machine::{ErrorPolicy, StateMachine};
use std::sync::Arc;
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use signalfsm::builder::StateMachineBuilder;
/// use signalfsm::core::{EventDecl, TransitionResult};
///
/// let machine = StateMachineBuilder::new()
///     .initial("locked")
///     .event(EventDecl::new("unlock").from("locked").to("unlocked"))
///     .event(EventDecl::new("lock").from("unlocked").to("locked"))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), "locked");
/// assert_eq!(machine.fire("unlock").unwrap(), TransitionResult::Succeeded);
/// assert_eq!(machine.state(), "unlocked");
/// ```
pub struct StateMachineBuilder {
    config: MachineConfig,
    bus: Option<Arc<dyn HookBus>>,
    policy: ErrorPolicy,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::from_config(MachineConfig::default())
    }

    /// Start from a deserialized configuration.
    pub fn from_config(config: MachineConfig) -> Self {
        Self {
            config,
            bus: None,
            policy: ErrorPolicy::default(),
        }
    }

    /// Start from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        MachineConfig::from_json(json).map(Self::from_config)
    }

    /// Set the initial state, or a full [`Initial`] description.
    pub fn initial(mut self, initial: impl Into<Initial>) -> Self {
        self.config.initial = Some(initial.into());
        self
    }

    /// Add one event declaration.
    pub fn event(mut self, decl: EventDecl) -> Self {
        self.config.events.push(decl);
        self
    }

    /// Add a batch of event declarations. Batches apply in call order.
    pub fn events(mut self, decls: impl IntoIterator<Item = EventDecl>) -> Self {
        self.config.events.extend(decls);
        self
    }

    /// Set the terminal state or states.
    pub fn terminal(mut self, terminal: impl Into<Terminal>) -> Self {
        self.config.terminal = Some(terminal.into());
        self
    }

    /// Publish hooks through `bus` instead of a private [`EventBus`].
    pub fn bus(mut self, bus: impl HookBus + 'static) -> Self {
        self.bus = Some(Arc::new(bus));
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the state machine.
    ///
    /// Fires the initial event unless it is deferred, so hooks registered
    /// on the bus beforehand observe the bootstrap transition.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if let Validation::Failure(errors) = self.config.validate() {
            return Err(BuildError::InvalidConfiguration(
                errors.iter().cloned().collect(),
            ));
        }

        let MachineConfig {
            initial,
            events,
            terminal,
        } = self.config;

        let mut map = TransitionMap::new();
        if let Some(initial) = &initial {
            map.add(
                &EventDecl::new(initial.event.clone())
                    .from(State::NONE)
                    .to(initial.state.clone()),
            );
        }
        for decl in &events {
            map.add(decl);
        }

        let bus = self
            .bus
            .unwrap_or_else(|| Arc::new(EventBus::new()) as Arc<dyn HookBus>);
        let machine = StateMachine::new(map, terminal, bus, self.policy);

        if let Some(initial) = initial.filter(|initial| !initial.defer) {
            machine.fire(&initial.event)?;
        }

        Ok(machine)
    }
}

impl Default for StateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
