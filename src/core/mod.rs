//! Core state types.
//!
//! This module contains the value types the engine is generic over:
//! - State enumerations via the `StateId` trait
//! - Transition decisions returned from update callbacks
//!
//! Nothing in this module has side effects.

mod decision;
mod state;

pub use decision::TransitionDecision;
pub use state::{StateId, MAX_STATE_COUNT};
