//! # Example: basic
//!
//! Demonstrates the creation operators and both consumption modes.
//!
//! Shows how to:
//! - Pull from a finite source with [`Observable::next`]
//! - Subscribe an [`Observer`] and wait for the stream to finish
//! - Fan out lookups with [`Observable::start`] (completion order)
//! - Stop an infinite [`Observable::interval`] with [`Subscription::dispose`]
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► just("R","x") ──► next() until EndOfStream
//!   ├─► range(1, 5)   ──► subscribe ──► on_next x4, on_done
//!   ├─► start(d1..d3) ──► subscribe ──► values in completion order
//!   └─► interval(200ms) ─► subscribe ──► ~1s ──► dispose ──► ticker stops
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic --features logging
//! ```

use std::time::Duration;

use rxflow::{DirectiveFn, DirectiveRef, Emitter, Observable, Observer, RxError};

#[cfg(feature = "logging")]
fn observer<T: std::fmt::Debug + Send + 'static>(name: &'static str) -> Observer<T> {
    rxflow::LogWriter::new().observer(name)
}

#[cfg(not(feature = "logging"))]
fn observer<T: std::fmt::Debug + Send + 'static>(name: &'static str) -> Observer<T> {
    Observer::new()
        .on_next(move |v: T| println!("{name}: {v:?}"))
        .on_error(move |e| println!("{name}: error {e}"))
        .on_done(move || println!("{name}: done"))
}

fn lookup(name: &'static str, ms: u64) -> DirectiveRef<String> {
    DirectiveFn::arc(move || async move {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Emitter::value(format!("{name} answered after {ms}ms"))
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("=== basic example ===\n");

    // 1. Pull mode
    let letters = Observable::just(["R", "x"]);
    loop {
        match letters.next().await {
            Ok(e) => println!("[pull] {:?}", e.into_result().map_err(|e| e.to_string())),
            Err(RxError::EndOfStream) => break,
            Err(e) => return Err(e.into()),
        }
    }

    // 2. Push mode over a finite range
    let sub = Observable::range(1, 5).subscribe(observer("range"))?;
    sub.finished().await;

    // 3. Fan-out with completion-order fan-in
    let lookups = Observable::start(vec![
        lookup("primary", 300),
        lookup("replica", 100),
        lookup("cache", 200),
    ]);
    let sub = lookups.subscribe(observer("start"))?;
    sub.finished().await;

    // 4. Infinite ticker, stopped by disposal
    let ticks = Observable::interval(Duration::from_millis(200));
    let sub = ticks.subscribe(observer("ticks"))?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    sub.dispose();
    ticks.producers_finished().await;
    println!("\n[ticks] state={:?} producing={}", sub.state(), ticks.is_producing());

    println!("\n=== example completed successfully ===");
    Ok(())
}
