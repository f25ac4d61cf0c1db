//! The running state machine.
//!
//! This module is the imperative side of the engine. It dispatches events
//! against the compiled [`TransitionMap`](crate::core::TransitionMap),
//! publishes hooks, and owns the single pending-transition slot.
//!
//! # Dispatch outcomes
//!
//! - **Rejected**: the call is illegal and goes to the [`ErrorPolicy`]
//! - **Cancelled**: a before or leave hook vetoed
//! - **NoTransition**: the destination equals the source
//! - **Pending**: a leave hook deferred; resolve via [`PendingTransition`]
//! - **Succeeded**: the state changed

mod error;
mod pending;
mod protocol;

pub use error::{ErrorPolicy, TransitionError, TransitionFailure};
pub use pending::PendingTransition;
pub use protocol::StateMachine;
