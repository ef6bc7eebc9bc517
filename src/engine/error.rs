//! Contract violations detected by the engine.

use thiserror::Error;

/// Programmer or configuration errors detected by a [`StateEngine`].
///
/// The panicking entry points (`new`, `configure`, `step`) abort with the
/// `Display` text of one of these. The `try_*` twins hand it back instead.
///
/// [`StateEngine`]: crate::engine::StateEngine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("State count {count} is out of range; an engine needs between 1 and 255 states")]
    InvalidStateCount { count: usize },

    #[error("Initial state is invalid! (ordinal {ordinal}, state count {count})")]
    InvalidInitialState { ordinal: usize, count: usize },

    #[error("Invalid state - ordinal {ordinal} is outside 0..{count}")]
    InvalidState { ordinal: usize, count: usize },

    #[error(
        "Cannot configure state '{state}' after calling step() - configure all states first"
    )]
    ConfigureAfterStart { state: String },

    #[error("State machine is in an invalid state (ordinal {ordinal}, state count {count})")]
    CorruptedState { ordinal: usize, count: usize },

    #[error(
        "State machine exceeded {limit} transitions in one step (last state '{state}'); \
         is there a transition cycle?"
    )]
    TransitionLimitExceeded { limit: usize, state: String },
}
