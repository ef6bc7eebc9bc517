//! Tickstate: a per-tick finite state machine engine
//!
//! Tickstate drives state logic in real-time loops. Given a fixed enumeration
//! of states and per-state callbacks, it fires exactly the right enter, update
//! and exit callbacks in the right order on every `step`.
//!
//! # Core Concepts
//!
//! - **State**: a contiguous enumeration implementing `StateId`
//! - **Decision**: what an update callback asks for, `stay()` or `to(state)`
//! - **Engine**: the callback table plus the stepping algorithm
//!
//! # Example
//!
//! ```rust
//! use tickstate::{state_enum, ImmediateEngine, TransitionDecision};
//!
//! state_enum! {
//!     enum Player {
//!         Idle,
//!         Running,
//!         Jumping,
//!     }
//! }
//!
//! let mut fsm = ImmediateEngine::<Player>::new(Player::Idle);
//! fsm.configure(Player::Idle)
//!     .on_update(|_, _| TransitionDecision::to(Player::Running));
//! fsm.configure(Player::Running)
//!     .on_update(|_, _| TransitionDecision::to(Player::Jumping));
//! fsm.configure(Player::Jumping)
//!     .on_update(|_, _| TransitionDecision::stay());
//!
//! fsm.step(1.0);
//! assert_eq!(fsm.current_state(), Player::Jumping);
//! ```

pub mod core;
pub mod engine;
mod macros;

// Re-export commonly used types
pub use crate::core::{StateId, TransitionDecision};
pub use engine::{
    EngineError, ImmediateEngine, SingleTransitionEngine, StateEngine, Time,
    MAX_TRANSITIONS_PER_STEP,
};
