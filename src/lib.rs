//! Signalfsm: a finite state machine engine with lifecycle hooks
//!
//! Signalfsm turns a declarative list of states and named events into a
//! running machine. It enforces which events are legal from which states,
//! publishes hooks around every transition, and lets a hook suspend a
//! transition until the caller decides to commit or cancel it.
//!
//! # Core Concepts
//!
//! - **Events**: Declared as `{ name, from, to }`; a missing `from` is the
//!   wildcard, a missing `to` a no-op
//! - **Hooks**: `before`, `leave`, `enter`, `change` and `after` hooks,
//!   published on a pluggable [`HookBus`]
//! - **Pending transitions**: A leave hook may defer; the machine blocks
//!   until the [`PendingTransition`] is committed or cancelled
//! - **Error policy**: Illegal calls go through a replaceable [`ErrorPolicy`]
//!
//! # Example
//!
//! ```rust
//! use signalfsm::{events, EventBus, HookKey, HookOutcome, StateMachineBuilder, TransitionResult};
//! use std::sync::Arc;
//!
//! let bus = Arc::new(EventBus::new());
//! bus.on(HookKey::leave("uploading"), |_ctx| HookOutcome::Defer);
//!
//! let machine = StateMachineBuilder::new()
//!     .initial("idle")
//!     .events(events![
//!         "upload": ["idle"] => "uploading",
//!         "finish": ["uploading"] => "done",
//!     ])
//!     .terminal("done")
//!     .bus(Arc::clone(&bus))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.fire("upload").unwrap(), TransitionResult::Succeeded);
//! assert_eq!(machine.fire("finish").unwrap(), TransitionResult::Pending);
//! assert_eq!(machine.state(), "uploading");
//!
//! machine.pending_transition().unwrap().commit().unwrap();
//! assert_eq!(machine.state(), "done");
//! assert!(machine.is_finished());
//! ```

pub mod builder;
pub mod core;
pub mod hooks;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, Initial, MachineConfig, StateMachineBuilder};
pub use crate::core::{
    ErrorCode, EventDecl, State, Terminal, TransitionMap, TransitionResult, NONE, WILDCARD,
};
pub use crate::hooks::{EventBus, HookBus, HookContext, HookKey, HookOutcome, ASYNC};
pub use crate::machine::{
    ErrorPolicy, PendingTransition, StateMachine, TransitionError, TransitionFailure,
};
