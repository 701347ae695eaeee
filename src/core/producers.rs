//! # Producer task group of one observable.
//!
//! Every creation operator spawns its producer work (pushers, pumps, tickers,
//! directives) through a [`Producers`] group. The group owns:
//! - a [`TaskTracker`] so callers can check that no background work outlives
//!   the stream (`is_running`, `finished`);
//! - a [`CancellationToken`] that self-driving producers (`interval`,
//!   `create`) poll; disposing a linked subscription cancels it.
//!
//! ## Rules
//! - Producers are spawned **at construction time** (eager production).
//! - The group is sealed once the operator has spawned everything; after that
//!   `finished()` resolves as soon as the last producer exits.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Tracked set of producer tasks plus their cancellation token.
#[derive(Clone, Debug, Default)]
pub(crate) struct Producers {
    tracker: TaskTracker,
    token: CancellationToken,
}

impl Producers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Token polled by self-driving producers.
    pub(crate) fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Spawns an async producer on the runtime.
    pub(crate) fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn(fut);
    }

    /// Spawns a producer that may block (e.g. an external iterator).
    pub(crate) fn spawn_blocking<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.tracker.spawn_blocking(f);
    }

    /// No more producers will be added.
    pub(crate) fn seal(&self) {
        self.tracker.close();
    }

    /// True while at least one producer task is alive.
    pub(crate) fn is_running(&self) -> bool {
        !self.tracker.is_empty()
    }

    /// Resolves once the group is sealed and every producer has exited.
    pub(crate) async fn finished(&self) {
        self.tracker.wait().await;
    }
}
