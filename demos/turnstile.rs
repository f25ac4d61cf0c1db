//! Turnstile State Machine
//!
//! This demo walks a coin-operated turnstile through its two states.
//!
//! Key concepts:
//! - Declaring events with the `events!` macro
//! - Rejected events and the INVALID_TRANSITION code
//! - Declared self transitions reported as NOTRANSITION
//! - Observing hooks through an `EventBus`
//!
//! Run with: cargo run --example turnstile

use signalfsm::{events, EventBus, HookKey, HookOutcome, StateMachineBuilder};
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info,signalfsm=debug")
        .init();

    println!("=== Turnstile State Machine ===\n");

    let bus = Arc::new(EventBus::new());
    bus.on(HookKey::ChangeState, |ctx| {
        println!("  changeState: {} -> {} via {}", ctx.from(), ctx.to(), ctx.event());
        HookOutcome::proceed()
    });

    let machine = StateMachineBuilder::new()
        .initial("locked")
        .events(events![
            "coin": ["locked"] => "unlocked",
            "push": ["unlocked"] => "locked",
            "coin": ["unlocked"],
        ])
        .bus(Arc::clone(&bus))
        .build()
        .unwrap();

    println!("Initial state: {}\n", machine.state());

    for event in ["push", "coin", "coin", "push", "push"] {
        match machine.fire(event) {
            Ok(result) => println!("{event:<5} => {result} (now {})", machine.state()),
            Err(err) => println!("{event:<5} => rejected: {err}"),
        }
    }

    println!("\nKey Characteristics:");
    println!("- A second coin is tolerated because it is declared as a no-op");
    println!("- Pushing a locked turnstile is rejected and leaves the state alone");

    println!("\n=== Demo Complete ===");
}
