//! Deferred Upload
//!
//! This demo suspends a transition while work happens on another task and
//! commits it once the work finishes.
//!
//! Key concepts:
//! - A leave hook answering `Defer`
//! - Committing a `PendingTransition` from a spawned task
//! - Terminal states
//!
//! Run with: cargo run --example upload

use signalfsm::{events, EventBus, HookKey, HookOutcome, StateMachineBuilder, TransitionResult};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("info,signalfsm=debug")
        .init();

    println!("=== Deferred Upload ===\n");

    let bus = Arc::new(EventBus::new());
    bus.on(HookKey::leave("uploading"), |ctx| {
        println!("  leave:uploading -> waiting for the upload to finish");
        println!("  args: {:?}", ctx.args());
        HookOutcome::Defer
    });
    bus.on(HookKey::enter("done"), |_| {
        println!("  enter:done");
        HookOutcome::proceed()
    });

    let machine = StateMachineBuilder::new()
        .initial("idle")
        .events(events![
            "upload": ["idle"] => "uploading",
            "finish": ["uploading"] => "done",
            "fail": ["uploading"] => "idle",
        ])
        .terminal("done")
        .bus(Arc::clone(&bus))
        .build()?;

    machine.fire("upload")?;
    println!("State: {}", machine.state());

    let result = machine.fire_with("finish", vec![serde_json::json!({"bytes": 4096})])?;
    assert_eq!(result, TransitionResult::Pending);

    let pending = machine
        .pending_transition()
        .ok_or("transition should be pending")?;
    println!(
        "Pending {} ({} -> {}), other events blocked: {}",
        pending.event(),
        pending.from(),
        pending.to(),
        machine.cannot("fail")
    );

    let worker = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        pending.commit()
    });
    let committed = worker.await??;

    println!("\nCommit result: {committed}");
    println!("Final state: {} (finished: {})", machine.state(), machine.is_finished());

    println!("\n=== Demo Complete ===");
    Ok(())
}
