//! Core StateId trait for engine states.
//!
//! Engine states form a finite, contiguous, zero-based enumeration. The
//! engine indexes its callback table by ordinal, so every state type must
//! be able to convert to and from its ordinal.

use std::fmt::Debug;

/// Largest number of real states an engine accepts.
pub const MAX_STATE_COUNT: usize = 255;

/// Trait for engine state enumerations.
///
/// `COUNT` plays the role of the trailing `Count` sentinel: it is the number
/// of real states and is never itself a valid ordinal. All methods are pure.
///
/// Prefer declaring states with [`state_enum!`](crate::state_enum), which
/// guarantees the contiguous zero-based layout.
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl StateId for Door {
///     const COUNT: usize = 2;
///
///     fn ordinal(self) -> usize {
///         self as usize
///     }
///
///     fn from_ordinal(ordinal: usize) -> Option<Self> {
///         match ordinal {
///             0 => Some(Self::Open),
///             1 => Some(Self::Closed),
///             _ => None,
///         }
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.ordinal(), 1);
/// assert_eq!(Door::from_ordinal(2), None);
/// ```
pub trait StateId: Copy + Eq + Debug {
    /// Number of real states. Must be in `1..=255`.
    const COUNT: usize;

    /// Zero-based index of this state.
    fn ordinal(self) -> usize;

    /// Inverse of [`ordinal`](StateId::ordinal). Returns `None` for
    /// anything at or past `COUNT`.
    fn from_ordinal(ordinal: usize) -> Option<Self>;

    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check whether this state's ordinal lies inside `0..COUNT`.
    fn is_valid(self) -> bool {
        self.ordinal() < Self::COUNT
    }
}
