//! Result and error code tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a successfully dispatched event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransitionResult {
    /// The event moved the machine from one state to another
    Succeeded = 1,

    /// The event was legal but the destination equals the source
    NoTransition = 2,

    /// A before or leave hook vetoed the transition, or it was cancelled
    Cancelled = 3,

    /// A leave hook deferred the transition; the caller commits it later
    Pending = 4,
}

impl TransitionResult {
    /// Numeric code of this result.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TransitionResult {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Succeeded),
            2 => Ok(Self::NoTransition),
            3 => Ok(Self::Cancelled),
            4 => Ok(Self::Pending),
            other => Err(other),
        }
    }
}

impl fmt::Display for TransitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Succeeded => "SUCCEEDED",
            Self::NoTransition => "NOTRANSITION",
            Self::Cancelled => "CANCELLED",
            Self::Pending => "PENDING",
        };
        f.write_str(name)
    }
}

/// Classification of an illegal event call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ErrorCode {
    /// The event is not legal from the current state
    InvalidTransition = 100,

    /// The event was fired while a deferred transition was outstanding
    PendingTransition = 200,

    /// A caller-supplied hook failed. Never raised by the engine itself.
    InvalidCallback = 300,
}

impl ErrorCode {
    /// Numeric code of this error.
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            100 => Ok(Self::InvalidTransition),
            200 => Ok(Self::PendingTransition),
            300 => Ok(Self::InvalidCallback),
            other => Err(other),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::PendingTransition => "PENDING_TRANSITION",
            Self::InvalidCallback => "INVALID_CALLBACK",
        };
        f.write_str(name)
    }
}
