//! State engine that dispatches per-state callbacks each step.

use crate::core::{StateId, MAX_STATE_COUNT};
use crate::engine::callbacks::{CallbackBundle, StateConfig, Time};
use crate::engine::error::EngineError;
use crate::engine::policy::{
    Immediate, PolicyKind, SingleTransition, TransitionPolicy, MAX_TRANSITIONS_PER_STEP,
};
use crate::engine::snapshot::EngineSnapshot;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, error, trace};

/// Engine that chains transitions within one step.
pub type ImmediateEngine<'a, S, C = ()> = StateEngine<'a, S, C, Immediate>;

/// Engine that performs at most one switch per step.
pub type SingleTransitionEngine<'a, S, C = ()> = StateEngine<'a, S, C, SingleTransition>;

/// Finite state machine driven once per tick.
///
/// Owns one [`CallbackBundle`] per state, indexed by ordinal, plus the
/// current and last-entered state. The context is borrowed, never owned.
///
/// Lifecycle: construct, [`configure`](Self::configure) every state, then
/// call [`step`](Self::step) once per tick. Configuration is closed as soon
/// as the first step fires an enter callback.
///
/// # Example
///
/// ```rust
/// use tickstate::core::TransitionDecision;
/// use tickstate::engine::ImmediateEngine;
/// use tickstate::state_enum;
///
/// state_enum! {
///     enum Player {
///         Idle,
///         Running,
///     }
/// }
///
/// struct Body {
///     speed: f64,
/// }
///
/// let mut body = Body { speed: 0.0 };
/// let mut fsm = ImmediateEngine::with_context(Player::Idle, &mut body);
///
/// fsm.configure(Player::Idle)
///     .on_update(|_, _| TransitionDecision::to(Player::Running));
/// fsm.configure(Player::Running)
///     .on_enter(|body, _| {
///         if let Some(body) = body {
///             body.speed = 5.0;
///         }
///     })
///     .on_update(|_, _| TransitionDecision::stay());
///
/// fsm.step(0.016);
///
/// assert_eq!(fsm.current_state(), Player::Running);
/// assert_eq!(fsm.context().map(|b| b.speed), Some(5.0));
/// ```
pub struct StateEngine<'a, S: StateId, C = (), P: TransitionPolicy = Immediate> {
    context: Option<&'a mut C>,
    current: S,
    // Doubles as the "has started" flag: None until the first enter fires.
    last_entered: Option<S>,
    callbacks: Box<[CallbackBundle<'a, S, C>]>,
    _policy: PhantomData<P>,
}

impl<'a, S: StateId, C, P: TransitionPolicy> StateEngine<'a, S, C, P> {
    /// Create an engine in `initial` with no context.
    ///
    /// The initial state's enter callback fires on the first step.
    ///
    /// # Panics
    ///
    /// Panics if `S::COUNT` is outside `1..=255` or `initial` is out of range.
    #[track_caller]
    pub fn new(initial: S) -> Self {
        match Self::try_new(initial) {
            Ok(engine) => engine,
            Err(err) => fatal(err),
        }
    }

    /// Create an engine in `initial` that hands `context` to every callback.
    ///
    /// # Panics
    ///
    /// Same conditions as [`new`](Self::new).
    #[track_caller]
    pub fn with_context(initial: S, context: &'a mut C) -> Self {
        match Self::try_with_context(initial, context) {
            Ok(engine) => engine,
            Err(err) => fatal(err),
        }
    }

    /// Checked form of [`new`](Self::new).
    pub fn try_new(initial: S) -> Result<Self, EngineError> {
        Self::build(initial, None)
    }

    /// Checked form of [`with_context`](Self::with_context).
    pub fn try_with_context(initial: S, context: &'a mut C) -> Result<Self, EngineError> {
        Self::build(initial, Some(context))
    }

    fn build(initial: S, context: Option<&'a mut C>) -> Result<Self, EngineError> {
        if S::COUNT == 0 || S::COUNT > MAX_STATE_COUNT {
            return Err(EngineError::InvalidStateCount { count: S::COUNT });
        }
        if !initial.is_valid() {
            return Err(EngineError::InvalidInitialState {
                ordinal: initial.ordinal(),
                count: S::COUNT,
            });
        }

        let callbacks = (0..S::COUNT).map(|_| CallbackBundle::default()).collect();

        Ok(Self {
            context,
            current: initial,
            last_entered: None,
            callbacks,
            _policy: PhantomData,
        })
    }

    /// Edit the callbacks of `state`.
    ///
    /// # Panics
    ///
    /// Panics if `state` is out of range or the engine has already stepped.
    #[track_caller]
    pub fn configure(&mut self, state: S) -> StateConfig<'_, 'a, S, C> {
        if let Err(err) = self.check_configurable(state) {
            fatal(err);
        }
        StateConfig::new(&mut self.callbacks[state.ordinal()])
    }

    /// Checked form of [`configure`](Self::configure).
    pub fn try_configure(&mut self, state: S) -> Result<StateConfig<'_, 'a, S, C>, EngineError> {
        self.check_configurable(state)?;
        Ok(StateConfig::new(&mut self.callbacks[state.ordinal()]))
    }

    fn check_configurable(&self, state: S) -> Result<(), EngineError> {
        if !state.is_valid() {
            return Err(EngineError::InvalidState {
                ordinal: state.ordinal(),
                count: S::COUNT,
            });
        }
        if self.has_started() {
            return Err(EngineError::ConfigureAfterStart {
                state: state.name().to_string(),
            });
        }
        Ok(())
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> S {
        self.current
    }

    pub fn context(&self) -> Option<&C> {
        self.context.as_deref()
    }

    pub fn context_mut(&mut self) -> Option<&mut C> {
        self.context.as_deref_mut()
    }

    /// State whose enter callback fired most recently, if any.
    pub fn last_entered_state(&self) -> Option<S> {
        self.last_entered
    }

    /// Whether the first step has run. Configuration is closed afterwards.
    pub fn has_started(&self) -> bool {
        self.last_entered.is_some()
    }

    /// Whether `state` has no update callback and so can never be left.
    pub fn is_terminal(&self, state: S) -> bool {
        self.callbacks
            .get(state.ordinal())
            .is_none_or(CallbackBundle::is_terminal)
    }

    pub fn policy(&self) -> PolicyKind {
        P::KIND
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current: self.current.name().to_string(),
            current_ordinal: self.current.ordinal(),
            last_entered_ordinal: self.last_entered.map(StateId::ordinal),
            started: self.has_started(),
            policy: P::KIND,
            state_count: S::COUNT,
        }
    }

    /// Advance the machine by one tick.
    ///
    /// Under [`Immediate`] the machine keeps switching until a state stays,
    /// a terminal state is reached, or the transition cap is hit. Under
    /// [`SingleTransition`] at most one switch happens and the new state is
    /// entered on the next call.
    ///
    /// `time` is passed verbatim to every callback.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_TRANSITIONS_PER_STEP`] switches happen in
    /// one call, or if the current state is out of range.
    #[track_caller]
    pub fn step(&mut self, time: Time) {
        if let Err(err) = self.try_step(time) {
            fatal(err);
        }
    }

    /// Checked form of [`step`](Self::step).
    ///
    /// Callbacks that already ran before the error are not undone.
    pub fn try_step(&mut self, time: Time) -> Result<(), EngineError> {
        match P::KIND {
            PolicyKind::Immediate => {
                for _ in 0..MAX_TRANSITIONS_PER_STEP {
                    if !self.process_turn(time)? {
                        return Ok(());
                    }
                }
                Err(EngineError::TransitionLimitExceeded {
                    limit: MAX_TRANSITIONS_PER_STEP,
                    state: self.current.name().to_string(),
                })
            }
            PolicyKind::SingleTransition => {
                self.process_turn(time)?;
                Ok(())
            }
        }
    }

    /// Run the current state's turn: enter if needed, update, and switch if
    /// the decision asks for a valid different state.
    ///
    /// Returns whether a switch happened.
    fn process_turn(&mut self, time: Time) -> Result<bool, EngineError> {
        let current = self.current;
        let index = current.ordinal();
        if index >= S::COUNT {
            return Err(EngineError::CorruptedState {
                ordinal: index,
                count: S::COUNT,
            });
        }

        let bundle = &mut self.callbacks[index];

        if self.last_entered != Some(current) {
            trace!(state = current.name(), time, "entering state");
            if let Some(on_enter) = bundle.on_enter.as_mut() {
                on_enter(self.context.as_deref_mut(), time);
            }
            self.last_entered = Some(current);
        }

        // No update callback means terminal.
        let Some(on_update) = bundle.on_update.as_mut() else {
            return Ok(false);
        };

        let decision = on_update(self.context.as_deref_mut(), time);
        let Some(target) = decision.target() else {
            return Ok(false);
        };

        if target == current || !target.is_valid() {
            debug!(
                state = current.name(),
                target = target.ordinal(),
                "ignoring self or out-of-range transition request"
            );
            return Ok(false);
        }

        trace!(from = current.name(), to = target.name(), time, "switching state");
        if let Some(on_exit) = bundle.on_exit.as_mut() {
            on_exit(self.context.as_deref_mut(), time);
        }
        self.current = target;

        Ok(true)
    }
}

impl<'a, S: StateId, C, P: TransitionPolicy> fmt::Debug for StateEngine<'a, S, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateEngine")
            .field("current", &self.current)
            .field("last_entered", &self.last_entered)
            .field("policy", &P::KIND)
            .field("has_context", &self.context.is_some())
            .finish_non_exhaustive()
    }
}

#[cold]
#[track_caller]
fn fatal(err: EngineError) -> ! {
    error!(error = %err, "state engine contract violated");
    panic!("{err}");
}
