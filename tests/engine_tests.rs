//! Behavior of the engine under the immediate (chained) policy.

use std::cell::{Cell, RefCell};
use tickstate::{state_enum, ImmediateEngine, StateId, TransitionDecision};

state_enum! {
    enum TestState {
        Idle,
        Running,
        Jumping,
    }
}

#[derive(Default)]
struct TestContext {
    enter_count: usize,
    update_count: usize,
    exit_count: usize,
    last_time: f64,
    should_transition: bool,
    idle_updates: usize,
    running_updates: usize,
    jumping_updates: usize,
}

fn ctx(context: Option<&mut TestContext>) -> &mut TestContext {
    context.expect("engine was built with a context")
}

#[test]
fn can_create_state_machine() {
    let mut context = TestContext::default();
    let fsm = ImmediateEngine::with_context(TestState::Idle, &mut context);

    assert_eq!(fsm.current_state(), TestState::Idle);
    assert!(fsm.context().is_some());
}

#[test]
fn calls_on_enter_on_first_step() {
    let mut context = TestContext::default();
    let mut fsm = ImmediateEngine::with_context(TestState::Idle, &mut context);

    fsm.configure(TestState::Idle)
        .on_enter(|c, time| {
            let c = ctx(c);
            c.enter_count += 1;
            c.last_time = time;
        })
        .on_update(|_, _| TransitionDecision::stay());

    assert_eq!(fsm.context().unwrap().enter_count, 0);

    fsm.step(1.0);

    assert_eq!(fsm.context().unwrap().enter_count, 1);
    assert_eq!(fsm.context().unwrap().last_time, 1.0);
}

#[test]
fn enter_fires_once_per_occupancy() {
    let mut context = TestContext::default();
    let mut fsm = ImmediateEngine::with_context(TestState::Idle, &mut context);

    fsm.configure(TestState::Idle)
        .on_enter(|c, _| ctx(c).enter_count += 1)
        .on_update(|c, _| {
            ctx(c).update_count += 1;
            TransitionDecision::stay()
        });

    fsm.step(1.0);
    fsm.step(2.0);
    fsm.step(3.0);

    let context = fsm.context().unwrap();
    assert_eq!(context.enter_count, 1);
    assert_eq!(context.update_count, 3);
    assert_eq!(fsm.current_state(), TestState::Idle);
}

#[test]
fn can_transition_between_states() {
    let mut context = TestContext::default();
    let mut fsm = ImmediateEngine::with_context(TestState::Idle, &mut context);

    fsm.configure(TestState::Idle).on_update(|c, _| {
        if ctx(c).should_transition {
            TransitionDecision::to(TestState::Running)
        } else {
            TransitionDecision::stay()
        }
    });
    fsm.configure(TestState::Running)
        .on_enter(|c, _| ctx(c).enter_count += 1);

    fsm.step(1.0);
    assert_eq!(fsm.current_state(), TestState::Idle);

    fsm.context_mut().unwrap().should_transition = true;
    fsm.step(2.0);

    assert_eq!(fsm.current_state(), TestState::Running);
    assert_eq!(fsm.context().unwrap().enter_count, 1);
}

#[test]
fn complete_transition_lifecycle() {
    let mut context = TestContext::default();
    let mut fsm = ImmediateEngine::with_context(TestState::Idle, &mut context);

    fsm.configure(TestState::Idle)
        .on_enter(|c, _| ctx(c).enter_count += 1)
        .on_exit(|c, _| ctx(c).exit_count += 1)
        .on_update(|_, _| TransitionDecision::to(TestState::Running));
    fsm.configure(TestState::Running)
        .on_enter(|c, _| ctx(c).enter_count += 1)
        .on_update(|_, _| TransitionDecision::stay());

    fsm.step(1.0);

    assert_eq!(fsm.current_state(), TestState::Running);
    let context = fsm.context().unwrap();
    assert_eq!(context.enter_count, 2);
    assert_eq!(context.exit_count, 1);
}

#[test]
fn supports_chained_transitions() {
    let mut context = TestContext::default();
    let mut fsm = ImmediateEngine::with_context(TestState::Idle, &mut context);

    fsm.configure(TestState::Idle)
        .on_update(|_, _| TransitionDecision::to(TestState::Running));
    fsm.configure(TestState::Running)
        .on_enter(|c, _| ctx(c).enter_count += 1)
        .on_update(|_, _| TransitionDecision::to(TestState::Jumping));
    fsm.configure(TestState::Jumping)
        .on_enter(|c, _| ctx(c).enter_count += 1)
        .on_update(|_, _| TransitionDecision::stay());

    fsm.step(1.0);

    assert_eq!(fsm.current_state(), TestState::Jumping);
    assert_eq!(fsm.context().unwrap().enter_count, 2);
}

#[test]
fn chained_scenario_fires_every_callback_once() {
    let log = RefCell::new(Vec::new());
    let mut fsm = ImmediateEngine::<TestState>::new(TestState::Idle);

    for state in [TestState::Idle, TestState::Running, TestState::Jumping] {
        let next = match state {
            TestState::Idle => TransitionDecision::to(TestState::Running),
            TestState::Running => TransitionDecision::to(TestState::Jumping),
            TestState::Jumping => TransitionDecision::stay(),
        };
        let log = &log;
        fsm.configure(state)
            .on_enter(move |_, _| log.borrow_mut().push(format!("{}.enter", state.name())))
            .on_update(move |_, _| next)
            .on_exit(move |_, _| log.borrow_mut().push(format!("{}.exit", state.name())));
    }

    fsm.step(1.0);
    drop(fsm);

    assert_eq!(
        log.into_inner(),
        vec![
            "Idle.enter",
            "Idle.exit",
            "Running.enter",
            "Running.exit",
            "Jumping.enter",
        ]
    );
}

#[test]
fn works_without_context() {
    let saw_none = Cell::new(false);
    let mut fsm = ImmediateEngine::<TestState, TestContext>::new(TestState::Idle);

    fsm.configure(TestState::Idle).on_update(|c, _| {
        saw_none.set(c.is_none());
        TransitionDecision::stay()
    });

    fsm.step(1.0);

    assert_eq!(fsm.current_state(), TestState::Idle);
    assert!(saw_none.get());
}

#[test]
fn can_configure_multiple_states() {
    let mut context = TestContext::default();
    let mut fsm = ImmediateEngine::with_context(TestState::Idle, &mut context);

    fsm.configure(TestState::Idle).on_update(|c, _| {
        let c = ctx(c);
        c.idle_updates += 1;
        if c.idle_updates >= 2 {
            TransitionDecision::to(TestState::Running)
        } else {
            TransitionDecision::stay()
        }
    });
    fsm.configure(TestState::Running).on_update(|c, _| {
        let c = ctx(c);
        c.running_updates += 1;
        if c.running_updates >= 2 {
            TransitionDecision::to(TestState::Jumping)
        } else {
            TransitionDecision::stay()
        }
    });
    fsm.configure(TestState::Jumping).on_update(|c, _| {
        ctx(c).jumping_updates += 1;
        TransitionDecision::stay()
    });

    fsm.step(1.0);
    assert_eq!(fsm.current_state(), TestState::Idle);
    assert_eq!(fsm.context().unwrap().idle_updates, 1);

    // Chained: Running's update runs in the same step.
    fsm.step(2.0);
    assert_eq!(fsm.current_state(), TestState::Running);
    assert_eq!(fsm.context().unwrap().idle_updates, 2);
    assert_eq!(fsm.context().unwrap().running_updates, 1);

    fsm.step(3.0);
    assert_eq!(fsm.current_state(), TestState::Jumping);
    assert_eq!(fsm.context().unwrap().running_updates, 2);
    assert_eq!(fsm.context().unwrap().jumping_updates, 1);

    fsm.step(4.0);
    fsm.step(5.0);
    assert_eq!(fsm.current_state(), TestState::Jumping);
    assert_eq!(fsm.context().unwrap().jumping_updates, 3);
}

#[test]
fn supports_capturing_closures() {
    let external_counter = Cell::new(0);
    let transition_triggered = Cell::new(false);
    let mut fsm = ImmediateEngine::<TestState>::new(TestState::Idle);

    fsm.configure(TestState::Idle)
        .on_enter(|_, _| external_counter.set(external_counter.get() + 1))
        .on_update(|_, _| {
            if transition_triggered.get() {
                TransitionDecision::to(TestState::Running)
            } else {
                TransitionDecision::stay()
            }
        });
    fsm.configure(TestState::Running)
        .on_enter(|_, _| external_counter.set(external_counter.get() + 10));

    fsm.step(1.0);
    assert_eq!(external_counter.get(), 1);
    assert_eq!(fsm.current_state(), TestState::Idle);

    transition_triggered.set(true);
    fsm.step(2.0);

    assert_eq!(external_counter.get(), 11);
    assert_eq!(fsm.current_state(), TestState::Running);
}

#[test]
fn closures_may_own_their_state() {
    let mut fsm = ImmediateEngine::<TestState>::new(TestState::Idle);
    let mut ticks = 0;

    fsm.configure(TestState::Idle).on_update(move |_, _| {
        ticks += 1;
        if ticks == 3 {
            TransitionDecision::to(TestState::Jumping)
        } else {
            TransitionDecision::stay()
        }
    });

    fsm.step(1.0);
    fsm.step(2.0);
    assert_eq!(fsm.current_state(), TestState::Idle);

    fsm.step(3.0);
    assert_eq!(fsm.current_state(), TestState::Jumping);
}

#[test]
fn time_is_passed_through_verbatim() {
    let seen = RefCell::new(Vec::new());
    let mut fsm = ImmediateEngine::<TestState>::new(TestState::Idle);

    fsm.configure(TestState::Idle)
        .on_enter(|_, time| seen.borrow_mut().push(time))
        .on_update(|_, time| {
            seen.borrow_mut().push(time);
            TransitionDecision::stay()
        });

    fsm.step(-2.5);
    fsm.step(1e9);
    drop(fsm);

    assert_eq!(seen.into_inner(), vec![-2.5, -2.5, 1e9]);
}

#[test]
fn engine_can_be_moved() {
    let mut fsm = ImmediateEngine::<TestState>::new(TestState::Idle);
    fsm.configure(TestState::Idle)
        .on_update(|_, _| TransitionDecision::to(TestState::Running));

    let mut moved = fsm;
    moved.step(1.0);

    assert_eq!(moved.current_state(), TestState::Running);
}

#[test]
fn long_running_chain_stays_correct() {
    const TICKS: usize = 10_000;
    const THRESHOLD: usize = 1_000;

    let counter = Cell::new(0usize);
    let mut fsm = ImmediateEngine::<TestState>::new(TestState::Idle);

    fsm.configure(TestState::Idle).on_update(|_, _| {
        counter.set(counter.get() + 1);
        if counter.get() >= THRESHOLD {
            TransitionDecision::switch_to(TestState::Running)
        } else {
            TransitionDecision::stay_in_current()
        }
    });
    fsm.configure(TestState::Running).on_update(|_, _| {
        counter.set(counter.get() + 1);
        if counter.get() >= THRESHOLD * 2 {
            TransitionDecision::switch_to(TestState::Jumping)
        } else {
            TransitionDecision::stay_in_current()
        }
    });
    fsm.configure(TestState::Jumping).on_update(|_, _| {
        counter.set(counter.get() + 1);
        TransitionDecision::stay_in_current()
    });

    for tick in 0..TICKS {
        fsm.step(tick as f64);
    }

    assert_eq!(fsm.current_state(), TestState::Jumping);
    // Each of the two chained switches adds an extra update in its tick.
    assert_eq!(counter.get(), TICKS + 2);
}
