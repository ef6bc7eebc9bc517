//! Transition policies.
//!
//! A policy controls how many state switches a single `step` may perform.
//! It is chosen through the engine's type parameter and cannot change once
//! the engine exists.

use serde::{Deserialize, Serialize};

/// Hard cap on chained transitions within one step under [`Immediate`].
pub const MAX_TRANSITIONS_PER_STEP: usize = 256;

/// Runtime name of a transition policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Chained transitions within one step.
    Immediate,

    /// At most one switch per step; the new state is entered next step.
    SingleTransition,
}

/// Compile-time transition policy.
///
/// Implemented by the marker types [`Immediate`] and [`SingleTransition`].
pub trait TransitionPolicy {
    const KIND: PolicyKind;
}

/// Allows chained transitions in one step.
///
/// When a state switches, the new state's enter and update run in the same
/// step. This continues until a state stays, a terminal state is reached,
/// or [`MAX_TRANSITIONS_PER_STEP`] switches have happened.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

/// Performs at most one switch per step.
///
/// The switch happens immediately, but the new state's enter and update are
/// deferred to the next step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleTransition;

impl TransitionPolicy for Immediate {
    const KIND: PolicyKind = PolicyKind::Immediate;
}

impl TransitionPolicy for SingleTransition {
    const KIND: PolicyKind = PolicyKind::SingleTransition;
}
