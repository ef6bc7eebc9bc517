//! The tick-driven state engine.
//!
//! # Key Concepts
//!
//! - **Callbacks**: each state may have enter, update and exit callbacks
//! - **Policy**: chained (`Immediate`) or one switch per step (`SingleTransition`)
//! - **Contract violations**: reported as [`EngineError`], fatal unless the
//!   `try_*` entry points are used
//!
//! The engine is single-threaded and performs no allocation while stepping.

mod callbacks;
mod error;
mod machine;
mod policy;
mod snapshot;

pub use callbacks::{CallbackBundle, StateConfig, StateHook, Time, UpdateHook};
pub use error::EngineError;
pub use machine::{ImmediateEngine, SingleTransitionEngine, StateEngine};
pub use policy::{Immediate, PolicyKind, SingleTransition, TransitionPolicy, MAX_TRANSITIONS_PER_STEP};
pub use snapshot::EngineSnapshot;
