//! Hooks published around the transition lifecycle.
//!
//! The engine only depends on the [`HookBus`] capability. [`EventBus`] is a
//! small in-memory implementation; any other dispatcher can be plugged in by
//! implementing the trait.
//!
//! # Order
//!
//! For an event that changes state, hooks fire in this order:
//!
//! ```text
//! before:<event> -> beforeEvent -> leave:<from> -> leaveState
//!   -> <event> -> enter:<to> -> enterState -> changeState
//!   -> after:<event> -> afterEvent
//! ```

mod bus;
mod key;

pub use bus::{EventBus, HookBus, HookContext, HookOutcome, Listener, ASYNC};
pub use key::HookKey;
