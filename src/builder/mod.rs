//! Builder API for state machine construction.
//!
//! This module provides the fluent [`StateMachineBuilder`], the serializable
//! [`MachineConfig`] it is driven by, and the [`events!`](crate::events)
//! macro for compact event tables.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::{Initial, MachineConfig, DEFAULT_STARTUP_EVENT};
pub use error::{BuildError, ConfigViolation};
pub use machine::StateMachineBuilder;
