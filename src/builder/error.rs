//! Build errors for machine configuration.

use crate::machine::TransitionError;
use thiserror::Error;

/// A single problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Event name must not be empty")]
    EmptyEventName,

    #[error("Event '{event}' declares an empty state name")]
    EmptyStateName { event: String },

    #[error("Event '{event}' leads to the reserved state 'none'")]
    ReservedDestination { event: String },

    #[error("Initial state must not be the reserved state 'none'")]
    ReservedInitialState,

    #[error("Initial state must not be empty")]
    EmptyInitialState,
}

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {}", render(.0))]
    InvalidConfiguration(Vec<ConfigViolation>),

    #[error("Initial transition failed: {0}")]
    Startup(#[from] TransitionError),

    #[error("Configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
