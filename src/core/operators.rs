//! # Creation operators.
//!
//! Every operator builds a fresh [`Observable`] and spawns its producers
//! **before returning** (eager production). Production starts even with zero
//! subscribers and is bounded only by the stream buffer (see
//! [`Config`](crate::Config) for the per-operator buffering policy).
//!
//! | Operator    | Producer                                        | Closes when            | Linked |
//! |-------------|-------------------------------------------------|------------------------|--------|
//! | `create`    | user directive with a [`Sink`]                  | directive returns      | yes    |
//! | `empty`     | none                                            | immediately            | no     |
//! | `just`      | pusher task, argument order                     | all values pushed      | no     |
//! | `from_pull` | blocking pump over a [`Pull`] source            | first pull error       | no     |
//! | `start`     | one task per directive, completion-order fan-in | all directives done    | no     |
//! | `interval`  | ticker task                                     | never (dispose only)   | yes    |
//! | `range`     | pusher task, `start..end`                       | `end - 1` pushed       | no     |
//!
//! "Linked" producers are cancelled when a subscription is disposed.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tokio::select;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error};

use crate::config::Config;
use crate::core::dispatch::panic_message;
use crate::core::{Observable, Producers, Sink};
use crate::directives::DirectiveRef;
use crate::events::{Emitter, EventStream, Pull};

/// Smallest accepted `interval` period; tokio timers reject zero.
const MIN_PERIOD: Duration = Duration::from_nanos(1);

impl<T: Send + 'static> Observable<T> {
    /// Runs `directive` with a [`Sink`]; the stream closes when it returns.
    ///
    /// Uses [`Config::default`] buffering.
    ///
    /// # Example
    /// ```no_run
    /// use rxflow::Observable;
    ///
    /// # async fn demo() {
    /// let source = Observable::create(|sink| async move {
    ///     let _ = sink.next("Hello").await;
    /// });
    /// # }
    /// ```
    pub fn create<F, Fut>(directive: F) -> Self
    where
        F: FnOnce(Sink<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::create_with(&Config::default(), directive)
    }

    /// [`create`](Self::create) with explicit buffering.
    pub fn create_with<F, Fut>(cfg: &Config, directive: F) -> Self
    where
        F: FnOnce(Sink<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let producers = Producers::new();
        let (tx, stream) = EventStream::channel(cfg.create_capacity_clamped());
        let sink = Sink::new(tx, producers.token().clone());

        producers.spawn(async move {
            directive(sink).await;
            debug!("create directive returned");
        });
        Self::from_parts(stream, producers, true)
    }

    /// Closed stream: subscribers only see `on_done`.
    pub fn empty() -> Self {
        let (tx, stream) = EventStream::channel(1);
        drop(tx);
        Self::from_parts(stream, Producers::new(), false)
    }

    /// Emits `values` in order, then closes.
    pub fn just<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let producers = Producers::new();
        let emitters = values.into_iter().map(Emitter::Value).collect();
        let stream = EventStream::new(&producers, emitters);
        Self::from_parts(stream, producers, false)
    }

    /// Forwards every item of `src`; the first pull error closes the stream
    /// without being forwarded.
    ///
    /// Any `std::iter::Iterator` is a valid source.
    pub fn from_pull<P>(src: P) -> Self
    where
        P: Pull<Item = T>,
    {
        Self::from_pull_with(&Config::default(), src)
    }

    /// [`from_pull`](Self::from_pull) with explicit buffering.
    pub fn from_pull_with<P>(cfg: &Config, src: P) -> Self
    where
        P: Pull<Item = T>,
    {
        let producers = Producers::new();
        let stream = EventStream::from_pull(&producers, cfg.pull_capacity_clamped(), src);
        Self::from_parts(stream, producers, false)
    }

    /// Runs every directive concurrently, each in its own task, and emits the
    /// results in **completion order**. Closes once all have finished.
    ///
    /// Ties between directives finishing at the same instant follow the
    /// order in which their tasks reach the channel; no further ordering is
    /// imposed. A panicking directive yields an error emission.
    pub fn start<I>(directives: I) -> Self
    where
        I: IntoIterator<Item = DirectiveRef<T>>,
    {
        let directives: Vec<DirectiveRef<T>> = directives.into_iter().collect();
        let producers = Producers::new();
        let (tx, stream) = EventStream::channel(directives.len());

        for directive in directives {
            let tx = tx.clone();
            producers.spawn(async move {
                let emitter = match AssertUnwindSafe(directive.run()).catch_unwind().await {
                    Ok(emitter) => emitter,
                    Err(panic) => {
                        error!(panic = panic_message(panic.as_ref()), "directive panicked");
                        Emitter::error("directive panicked")
                    }
                };
                if tx.send(emitter).await.is_err() {
                    debug!("directive result dropped: stream gone");
                }
            });
        }
        Self::from_parts(stream, producers, false)
    }
}

impl Observable<u64> {
    /// Emits `0, 1, 2, …` every `period`, the first after one full period.
    ///
    /// The ticker starts at construction, not at subscribe: the k-th value is
    /// produced no earlier than k·`period` after this call, and a late
    /// subscriber first receives the tick already waiting in the buffer.
    ///
    /// Never closes on its own. Disposing a subscription stops the ticker
    /// task; dropping the observable stops it at the next tick.
    pub fn interval(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let producers = Producers::new();
        let (tx, stream) = EventStream::channel(1);
        let token = producers.token().clone();

        producers.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut n: u64 = 0;

            loop {
                select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                select! {
                    biased;
                    _ = token.cancelled() => break,
                    res = tx.send(Emitter::Value(n)) => {
                        if res.is_err() {
                            break;
                        }
                    }
                }
                n = n.wrapping_add(1);
            }
            debug!(emitted = n, "interval ticker stopped");
        });
        Self::from_parts(stream, producers, true)
    }
}

impl Observable<i64> {
    /// Emits `start, start + 1, …, end - 1`, then closes.
    ///
    /// Closes immediately when `end <= start`.
    pub fn range(start: i64, end: i64) -> Self {
        Self::range_with(&Config::default(), start, end)
    }

    /// [`range`](Self::range) with explicit buffering.
    pub fn range_with(cfg: &Config, start: i64, end: i64) -> Self {
        let count = if end > start { end.abs_diff(start) } else { 0 };
        let producers = Producers::new();
        let (tx, stream) = EventStream::channel(cfg.finite_capacity(count));

        if count > 0 {
            producers.spawn(async move {
                for n in start..end {
                    if tx.send(Emitter::Value(n)).await.is_err() {
                        debug!(next = n, "range abandoned: stream dropped");
                        break;
                    }
                }
            });
        }
        Self::from_parts(stream, producers, false)
    }
}
