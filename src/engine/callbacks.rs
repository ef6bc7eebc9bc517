//! Per-state callback storage and the chainable configurator.

use crate::core::{StateId, TransitionDecision};

/// Opaque time value handed verbatim to every callback.
pub type Time = f64;

/// Callback fired when a state is entered or exited.
pub type StateHook<'a, C> = Box<dyn FnMut(Option<&mut C>, Time) + 'a>;

/// Callback fired on every step while a state is current.
pub type UpdateHook<'a, S, C> = Box<dyn FnMut(Option<&mut C>, Time) -> TransitionDecision<S> + 'a>;

/// The three optional callbacks of one state.
///
/// An absent slot is a no-op. A state without an update callback is
/// terminal: it can never be left automatically.
pub struct CallbackBundle<'a, S: StateId, C> {
    pub(crate) on_enter: Option<StateHook<'a, C>>,
    pub(crate) on_update: Option<UpdateHook<'a, S, C>>,
    pub(crate) on_exit: Option<StateHook<'a, C>>,
}

impl<'a, S: StateId, C> CallbackBundle<'a, S, C> {
    pub fn is_terminal(&self) -> bool {
        self.on_update.is_none()
    }
}

impl<'a, S: StateId, C> Default for CallbackBundle<'a, S, C> {
    fn default() -> Self {
        Self {
            on_enter: None,
            on_update: None,
            on_exit: None,
        }
    }
}

/// Chainable editor for one state's callbacks.
///
/// Returned by [`StateEngine::configure`]. It mutably borrows the engine,
/// so it cannot outlive the table it edits. Each setter overwrites the
/// previous callback in that slot.
///
/// [`StateEngine::configure`]: crate::engine::StateEngine::configure
pub struct StateConfig<'e, 'a, S: StateId, C> {
    bundle: &'e mut CallbackBundle<'a, S, C>,
}

impl<'e, 'a, S: StateId, C> StateConfig<'e, 'a, S, C> {
    pub(crate) fn new(bundle: &'e mut CallbackBundle<'a, S, C>) -> Self {
        Self { bundle }
    }

    /// Set the callback run once each time the state becomes active.
    pub fn on_enter<F>(self, callback: F) -> Self
    where
        F: FnMut(Option<&mut C>, Time) + 'a,
    {
        self.bundle.on_enter = Some(Box::new(callback));
        self
    }

    /// Set the callback run on every step while the state is current.
    pub fn on_update<F>(self, callback: F) -> Self
    where
        F: FnMut(Option<&mut C>, Time) -> TransitionDecision<S> + 'a,
    {
        self.bundle.on_update = Some(Box::new(callback));
        self
    }

    /// Set the callback run when the state is left.
    pub fn on_exit<F>(self, callback: F) -> Self
    where
        F: FnMut(Option<&mut C>, Time) + 'a,
    {
        self.bundle.on_exit = Some(Box::new(callback));
        self
    }
}
