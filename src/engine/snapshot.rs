//! Serializable point-in-time view of an engine.

use crate::engine::policy::PolicyKind;
use serde::{Deserialize, Serialize};

/// Diagnostic snapshot of a [`StateEngine`](crate::engine::StateEngine).
///
/// Carries no callbacks and no context, only where the engine is. Useful
/// for debug overlays and structured logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Name of the current state
    pub current: String,

    /// Ordinal of the current state
    pub current_ordinal: usize,

    /// Ordinal of the state whose enter callback last fired
    pub last_entered_ordinal: Option<usize>,

    /// Whether the engine has processed its first step
    pub started: bool,

    pub policy: PolicyKind,

    /// Number of real states
    pub state_count: usize,
}

impl EngineSnapshot {
    /// True when the current state was switched to but not yet entered.
    ///
    /// Only observable under the single-transition policy.
    pub fn is_pending_enter(&self) -> bool {
        self.started && self.last_entered_ordinal != Some(self.current_ordinal)
    }
}
