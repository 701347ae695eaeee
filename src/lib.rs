//! # rxflow
//!
//! **rxflow** is a small reactive-stream engine for tokio.
//!
//! It provides an [`Observable`]: an asynchronous sequence that is fed by
//! producer tasks and consumed either by pulling ([`Observable::next`]) or by
//! subscribing an [`Observer`] ([`Observable::subscribe`]). Consumption is
//! cancelled cooperatively through the returned [`Subscription`].
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   create     │   │ just / range │   │ start(d1..n) │   creation operators
//!     │  (directive) │   │  from_pull   │   │   interval   │   (spawn eagerly)
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Observable                                                       │
//! │  - EventStream (bounded mpsc of Emitter, single effective reader) │
//! │  - Notifier    (one-shot "lifecycle ended" signal)                │
//! │  - Producers   (tracked producer tasks + cancellation token)      │
//! └──────┬─────────────────────────────────────────────┬──────────────┘
//!        │ next().await (pull)                         │ subscribe(observer) (push)
//!        ▼                                             ▼
//!   Emitter | EndOfStream                     ┌────────────────┐
//!                                             │ dispatch task  │──► on_next / on_error / on_done
//!                                             └───────┬────────┘
//!                                                     ▲
//!                                   Subscription::dispose() (cancellation token)
//! ```
//!
//! ### Lifecycle
//! ```text
//! operator() ──► spawn producers ──► Observable
//!
//! dispatch loop {
//!   ├─► disposed?        → exit                     (Disposed)
//!   ├─► next()
//!   │     ├─ Value(v)    → on_next(v), continue
//!   │     ├─ Error(e)    → on_error(e), exit        (Errored)
//!   │     └─ EndOfStream → on_done(), exit          (Completed)
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                          |
//! |-------------------|----------------------------------------------------------|---------------------------------------------|
//! | **Observables**   | Eager streams with pull and push consumption.            | [`Observable`], [`Emitter`]                 |
//! | **Subscriptions** | Cooperative cancellation and terminal-state tracking.    | [`Subscription`], [`SubscriptionState`]     |
//! | **Observers**     | Three optional callbacks: next, error, done.             | [`Observer`]                                |
//! | **Producers**     | Directives for `start`, sinks for `create`, pull sources.| [`Directive`], [`DirectiveFn`], [`Sink`], [`Pull`] |
//! | **Signals**       | Idempotent completion signal.                            | [`Notifier`]                                |
//! | **Errors**        | Typed runtime errors; boxed user errors.                 | [`RxError`], [`BoxError`]                   |
//! | **Configuration** | Buffer sizing for operators of unknown length.           | [`Config`]                                  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//! use rxflow::{DirectiveFn, DirectiveRef, Emitter, Observable, Observer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let seen = Arc::new(Mutex::new(Vec::new()));
//!     let sink = Arc::clone(&seen);
//!
//!     // Two lookups racing: results arrive in completion order.
//!     let slow: DirectiveRef<&str> = DirectiveFn::arc(|| async {
//!         tokio::time::sleep(Duration::from_millis(20)).await;
//!         Emitter::value("slow")
//!     });
//!     let fast: DirectiveRef<&str> = DirectiveFn::arc(|| async { Emitter::value("fast") });
//!
//!     let source = Observable::start(vec![slow, fast]);
//!     let sub = source.subscribe(
//!         Observer::new()
//!             .on_next(move |v| sink.lock().unwrap().push(v))
//!             .on_done(|| println!("done")),
//!     )?;
//!
//!     sub.finished().await;
//!     assert_eq!(*seen.lock().unwrap(), vec!["fast", "slow"]);
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod directives;
mod error;
mod events;
mod observers;

// ---- Public re-exports ----

pub use config::Config;
pub use crate::core::{Notifier, Observable, Sink, Subscription, SubscriptionState};
pub use directives::{Directive, DirectiveFn, DirectiveRef};
pub use error::{BoxError, RxError};
pub use events::{Emitter, Pull};
pub use observers::{DoneFn, ErrorFn, NextFn, Observer};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
