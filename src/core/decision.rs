//! Transition decisions returned by update callbacks.

use super::state::StateId;

/// Outcome of a state's update callback.
///
/// A decision is either "remain in the current state" or "move to state X".
/// The representation is private: the only way to build one is through
/// [`stay`](TransitionDecision::stay) or [`to`](TransitionDecision::to)
/// (and their long-form aliases), so a half-specified decision cannot exist.
///
/// # Example
///
/// ```rust
/// use tickstate::core::TransitionDecision;
/// use tickstate::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let go = TransitionDecision::to(Light::Green);
/// assert_eq!(go.target(), Some(Light::Green));
///
/// let wait = TransitionDecision::<Light>::stay();
/// assert!(wait.is_stay());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[must_use = "a transition decision does nothing unless returned from an update callback"]
pub struct TransitionDecision<S: StateId> {
    kind: Decision<S>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Decision<S> {
    Stay,
    SwitchTo(S),
}

impl<S: StateId> TransitionDecision<S> {
    /// Request a move to `state`.
    pub const fn to(state: S) -> Self {
        Self {
            kind: Decision::SwitchTo(state),
        }
    }

    /// Long-form alias of [`to`](TransitionDecision::to).
    pub const fn switch_to(state: S) -> Self {
        Self::to(state)
    }

    /// Remain in the current state.
    pub const fn stay() -> Self {
        Self {
            kind: Decision::Stay,
        }
    }

    /// Long-form alias of [`stay`](TransitionDecision::stay).
    pub const fn stay_in_current() -> Self {
        Self::stay()
    }

    pub fn is_stay(&self) -> bool {
        matches!(self.kind, Decision::Stay)
    }

    /// Requested target, or `None` for a stay decision.
    pub fn target(&self) -> Option<S> {
        match self.kind {
            Decision::Stay => None,
            Decision::SwitchTo(state) => Some(state),
        }
    }
}

impl<S: StateId> Default for TransitionDecision<S> {
    fn default() -> Self {
        Self::stay()
    }
}
