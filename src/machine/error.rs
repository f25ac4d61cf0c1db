//! Illegal-call reporting and the pluggable error policy.

use crate::core::{ErrorCode, State, TransitionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Full context of an illegal event call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionFailure {
    pub event: String,
    pub from: State,
    pub to: State,
    pub args: Vec<Value>,
    pub code: ErrorCode,
    pub message: String,
}

impl TransitionFailure {
    /// Report a failed hook callback.
    ///
    /// The engine never raises [`ErrorCode::InvalidCallback`] itself; hooks
    /// use this to describe their own failures in the same shape.
    pub fn invalid_callback(
        event: impl Into<String>,
        from: State,
        to: State,
        args: Vec<Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event: event.into(),
            from,
            to,
            args,
            code: ErrorCode::InvalidCallback,
            message: message.into(),
        }
    }
}

impl fmt::Display for TransitionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors returned from event dispatch and pending-transition resolution.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("{0}")]
    Rejected(TransitionFailure),

    #[error("Transition '{event}' from '{from}' to '{to}' is no longer pending")]
    StaleHandle {
        event: String,
        from: State,
        to: State,
    },
}

impl TransitionError {
    /// Error code of a rejected call.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            TransitionError::Rejected(failure) => Some(failure.code),
            TransitionError::StaleHandle { .. } => None,
        }
    }
}

impl From<TransitionFailure> for TransitionError {
    fn from(failure: TransitionFailure) -> Self {
        TransitionError::Rejected(failure)
    }
}

/// Type alias for error policy functions.
type PolicyFn =
    Arc<dyn Fn(TransitionFailure) -> Result<TransitionResult, TransitionError> + Send + Sync>;

/// Handler invoked when an event is fired illegally.
///
/// The default policy returns the failure as an error. A custom policy may
/// turn it into a result instead.
///
/// # Example
///
/// ```rust
/// use signalfsm::core::TransitionResult;
/// use signalfsm::machine::ErrorPolicy;
///
/// let lenient = ErrorPolicy::new(|failure| {
///     eprintln!("ignored: {failure}");
///     Ok(TransitionResult::NoTransition)
/// });
/// # let _ = lenient;
/// ```
#[derive(Clone)]
pub struct ErrorPolicy(PolicyFn);

impl ErrorPolicy {
    pub fn new<F>(policy: F) -> Self
    where
        F: Fn(TransitionFailure) -> Result<TransitionResult, TransitionError>
            + Send
            + Sync
            + 'static,
    {
        ErrorPolicy(Arc::new(policy))
    }

    /// Return every failure as [`TransitionError::Rejected`].
    pub fn raise() -> Self {
        Self::new(|failure| Err(TransitionError::Rejected(failure)))
    }

    /// Log every failure at warn level and answer with `result`.
    pub fn warn(result: TransitionResult) -> Self {
        Self::new(move |failure| {
            tracing::warn!(
                event = %failure.event,
                from = %failure.from,
                to = %failure.to,
                code = failure.code.code(),
                "{}",
                failure.message
            );
            Ok(result)
        })
    }

    pub fn handle(&self, failure: TransitionFailure) -> Result<TransitionResult, TransitionError> {
        (self.0)(failure)
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self::raise()
    }
}

impl fmt::Debug for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorPolicy(..)")
    }
}
