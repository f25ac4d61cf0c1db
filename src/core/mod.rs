//! Core state machine types.
//!
//! This module contains the pure data side of the engine:
//! - State tokens and terminal-state sets
//! - Event declarations and the compiled transition map
//! - Result and error code tables
//!
//! Nothing in this module publishes hooks or mutates a running machine.

mod codes;
mod map;
mod state;

pub use codes::{ErrorCode, TransitionResult};
pub use map::{EventDecl, Source, TransitionMap};
pub use state::{State, Terminal, NONE, WILDCARD};
