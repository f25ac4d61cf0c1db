//! Deferred transitions and the handle that resolves them.

use super::error::TransitionError;
use super::protocol::StateMachine;
use crate::core::{State, TransitionResult};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// A transition that passed validation and is waiting to be committed.
pub(crate) struct InFlight {
    pub(crate) id: Uuid,
    pub(crate) event: String,
    pub(crate) from: State,
    pub(crate) to: State,
    pub(crate) args: Vec<Value>,
    pub(crate) created_at: DateTime<Utc>,
    resolution: Mutex<Option<TransitionResult>>,
}

impl InFlight {
    pub(crate) fn new(event: &str, from: State, to: State, args: Vec<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            event: event.to_string(),
            from,
            to,
            args,
            created_at: Utc::now(),
            resolution: Mutex::new(None),
        }
    }

    pub(crate) fn resolve(&self, result: TransitionResult) {
        *self.resolution.lock() = Some(result);
    }

    /// How the transition was resolved, once it has been.
    pub(crate) fn resolution(&self) -> Option<TransitionResult> {
        *self.resolution.lock()
    }

    pub(crate) fn stale(&self) -> TransitionError {
        TransitionError::StaleHandle {
            event: self.event.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

/// Handle to a machine's outstanding transition.
///
/// Obtained from [`StateMachine::pending_transition`] after a leave hook
/// deferred the transition. Exactly one of [`commit`](Self::commit) or
/// [`cancel`](Self::cancel) takes effect; any later call on the same
/// transition returns [`TransitionError::StaleHandle`] and leaves the
/// machine untouched.
///
/// The engine never expires a handle. An abandoned handle keeps the machine
/// blocked until it is resolved; use [`elapsed`](Self::elapsed) to build a
/// timeout on top if one is needed.
#[derive(Clone)]
pub struct PendingTransition {
    machine: StateMachine,
    inner: Arc<InFlight>,
}

impl PendingTransition {
    pub(crate) fn new(machine: StateMachine, inner: Arc<InFlight>) -> Self {
        Self { machine, inner }
    }

    /// Identifier of this transition, unique per deferral.
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn event(&self) -> &str {
        &self.inner.event
    }

    pub fn from(&self) -> &State {
        &self.inner.from
    }

    pub fn to(&self) -> &State {
        &self.inner.to
    }

    pub fn args(&self) -> &[Value] {
        &self.inner.args
    }

    /// When the transition was installed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Time since the transition was installed (pure)
    pub fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.inner.created_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Whether the machine is still waiting on this transition.
    pub fn is_outstanding(&self) -> bool {
        self.machine.holds(self.inner.id)
    }

    /// Complete the transition: move to the destination state and publish
    /// the commit, enter, change and after hooks.
    pub fn commit(&self) -> Result<TransitionResult, TransitionError> {
        self.machine.commit_in_flight(&self.inner)
    }

    /// Abandon the transition. The state is unchanged; after hooks still
    /// fire.
    pub fn cancel(&self) -> Result<TransitionResult, TransitionError> {
        self.machine.cancel_in_flight(&self.inner)
    }
}

impl fmt::Debug for PendingTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTransition")
            .field("id", &self.inner.id)
            .field("event", &self.inner.event)
            .field("from", &self.inner.from)
            .field("to", &self.inner.to)
            .field("args", &self.inner.args)
            .field("created_at", &self.inner.created_at)
            .finish()
    }
}
