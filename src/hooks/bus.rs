//! Hook publication: the bus capability and an in-memory implementation.

use super::key::HookKey;
use crate::core::State;
use crate::machine::{PendingTransition, StateMachine};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Listener value an untyped bus uses to ask for a deferred transition.
pub const ASYNC: &str = "async";

/// What a hook asks the engine to do.
#[derive(Clone, Debug, PartialEq)]
pub enum HookOutcome {
    /// Cancel the transition. Honoured by before and leave hooks.
    Veto,

    /// Suspend the transition until the caller commits or cancels it.
    /// Honoured by leave hooks.
    Defer,

    /// Carry on. The value is ignored by the engine.
    Continue(Value),
}

impl HookOutcome {
    /// Carry on with no value.
    pub fn proceed() -> Self {
        HookOutcome::Continue(Value::Null)
    }

    /// Read a listener result from a bus that signals with plain values:
    /// boolean `false` vetoes, the string [`ASYNC`] defers, anything else
    /// continues.
    pub fn interpret(value: Value) -> Self {
        match value {
            Value::Bool(false) => HookOutcome::Veto,
            Value::String(ref token) if token == ASYNC => HookOutcome::Defer,
            other => HookOutcome::Continue(other),
        }
    }

    pub fn is_veto(&self) -> bool {
        matches!(self, HookOutcome::Veto)
    }

    pub fn is_defer(&self) -> bool {
        matches!(self, HookOutcome::Defer)
    }
}

impl Default for HookOutcome {
    fn default() -> Self {
        HookOutcome::proceed()
    }
}

/// Transition details handed to every hook.
///
/// The machine reference lets a hook query state, fire further events or
/// resolve the pending transition from inside the hook.
pub struct HookContext<'a> {
    machine: &'a StateMachine,
    event: &'a str,
    from: &'a State,
    to: &'a State,
    args: &'a [Value],
}

impl<'a> HookContext<'a> {
    pub(crate) fn new(
        machine: &'a StateMachine,
        event: &'a str,
        from: &'a State,
        to: &'a State,
        args: &'a [Value],
    ) -> Self {
        Self {
            machine,
            event,
            from,
            to,
            args,
        }
    }

    pub fn machine(&self) -> &'a StateMachine {
        self.machine
    }

    pub fn event(&self) -> &'a str {
        self.event
    }

    pub fn from(&self) -> &'a State {
        self.from
    }

    pub fn to(&self) -> &'a State {
        self.to
    }

    /// Arguments the event was fired with.
    pub fn args(&self) -> &'a [Value] {
        self.args
    }

    /// The machine's outstanding transition, if any.
    pub fn pending(&self) -> Option<PendingTransition> {
        self.machine.pending_transition()
    }
}

impl fmt::Debug for HookContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookContext")
            .field("event", &self.event)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("args", &self.args)
            .finish()
    }
}

/// Capability the engine publishes hooks through.
///
/// Implement this to route hooks into an existing dispatcher.
pub trait HookBus: Send + Sync {
    fn publish(&self, key: &HookKey, ctx: &HookContext<'_>) -> HookOutcome;
}

impl<B: HookBus + ?Sized> HookBus for Arc<B> {
    fn publish(&self, key: &HookKey, ctx: &HookContext<'_>) -> HookOutcome {
        (**self).publish(key, ctx)
    }
}

/// Type alias for hook listener functions.
pub type Listener = Arc<dyn Fn(&HookContext<'_>) -> HookOutcome + Send + Sync>;

/// In-memory hook bus.
///
/// Listeners for a key run in registration order. When several listeners
/// answer, a veto from any of them wins, then a defer, then the last
/// `Continue` value. A key without listeners continues with `Null`.
///
/// # Example
///
/// ```rust
/// use signalfsm::hooks::{EventBus, HookKey, HookOutcome};
///
/// let bus = EventBus::new();
/// bus.on(HookKey::before("unlock"), |_ctx| HookOutcome::Veto);
/// assert_eq!(bus.listener_count(&HookKey::before("unlock")), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    listeners: RwLock<HashMap<HookKey, Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `key`.
    pub fn on<F>(&self, key: HookKey, listener: F)
    where
        F: Fn(&HookContext<'_>) -> HookOutcome + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .entry(key)
            .or_default()
            .push(Arc::new(listener));
    }

    /// Remove every listener for `key`, returning how many were removed.
    pub fn off(&self, key: &HookKey) -> usize {
        self.listeners
            .write()
            .remove(key)
            .map_or(0, |removed| removed.len())
    }

    pub fn listener_count(&self, key: &HookKey) -> usize {
        self.listeners.read().get(key).map_or(0, Vec::len)
    }
}

impl HookBus for EventBus {
    fn publish(&self, key: &HookKey, ctx: &HookContext<'_>) -> HookOutcome {
        // Snapshot so listeners may register listeners or re-enter the machine.
        let listeners: Vec<Listener> = match self.listeners.read().get(key) {
            Some(listeners) => listeners.clone(),
            None => return HookOutcome::proceed(),
        };

        let mut outcome = HookOutcome::proceed();
        for listener in listeners {
            let answer = listener(ctx);
            outcome = match (outcome, answer) {
                (HookOutcome::Veto, _) | (_, HookOutcome::Veto) => HookOutcome::Veto,
                (HookOutcome::Defer, _) => HookOutcome::Defer,
                (_, answer) => answer,
            };
        }
        outcome
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.read();
        let mut keys: Vec<String> = listeners.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("EventBus").field("keys", &keys).finish()
    }
}
