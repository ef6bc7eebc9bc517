//! Character Controller State Machine
//!
//! This example drives a tiny platformer character through
//! Idle -> Running -> Jumping under both transition policies.
//!
//! Key concepts:
//! - Enter/update/exit callbacks per state
//! - Chained transitions within one step (Immediate)
//! - One switch per step with deferred enter (SingleTransition)
//! - A borrowed context shared by every callback
//!
//! Run with: cargo run --example character_controller

use tickstate::engine::{StateEngine, TransitionPolicy};
use tickstate::{state_enum, ImmediateEngine, SingleTransitionEngine, TransitionDecision};

state_enum! {
    enum Player {
        Idle,
        Running,
        Jumping,
    }
}

#[derive(Default)]
struct Body {
    velocity: f64,
    height: f64,
    events: Vec<String>,
}

fn body(context: Option<&mut Body>) -> &mut Body {
    context.expect("controller always has a body")
}

fn configure<P: TransitionPolicy>(fsm: &mut StateEngine<'_, Player, Body, P>) {
    fsm.configure(Player::Idle)
        .on_enter(|b, t| body(b).events.push(format!("{t:>4}: Idle.enter")))
        .on_update(|_, _| TransitionDecision::to(Player::Running))
        .on_exit(|b, t| body(b).events.push(format!("{t:>4}: Idle.exit")));

    fsm.configure(Player::Running)
        .on_enter(|b, t| {
            let b = body(b);
            b.velocity = 4.0;
            b.events.push(format!("{t:>4}: Running.enter"));
        })
        .on_update(|_, _| TransitionDecision::to(Player::Jumping))
        .on_exit(|b, t| body(b).events.push(format!("{t:>4}: Running.exit")));

    fsm.configure(Player::Jumping)
        .on_enter(|b, t| {
            let b = body(b);
            b.height = 1.5;
            b.events.push(format!("{t:>4}: Jumping.enter"));
        })
        .on_update(|_, _| TransitionDecision::stay());
}

fn drive<P: TransitionPolicy>(mut fsm: StateEngine<'_, Player, Body, P>) {
    configure(&mut fsm);

    for tick in 1..=3u32 {
        fsm.step(f64::from(tick));
        println!(
            "  after step {tick}: {:?} (entered: {:?})",
            fsm.current_state(),
            fsm.last_entered_state()
        );
    }

    if let Some(b) = fsm.context() {
        println!("  velocity = {}, height = {}", b.velocity, b.height);
        println!("  callback order:");
        for event in &b.events {
            println!("    {event}");
        }
    }
}

fn main() {
    println!("=== Character Controller State Machine ===\n");

    println!("Immediate policy (chained transitions):");
    let mut immediate_body = Body::default();
    drive(ImmediateEngine::with_context(
        Player::Idle,
        &mut immediate_body,
    ));

    println!("\nSingleTransition policy (one switch per step):");
    let mut single_body = Body::default();
    drive(SingleTransitionEngine::with_context(
        Player::Idle,
        &mut single_body,
    ));

    println!("\n=== Example Complete ===");
}
