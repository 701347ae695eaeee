//! # Subscription: cancellable handle of one `subscribe` call.
//!
//! A [`Subscription`] carries the cancellation signal the dispatch loop polls
//! and, for self-driving sources (`interval`, `create`), the producer's own
//! token so disposal stops production too.
//!
//! ## State machine
//! ```text
//!            dispose()
//!   Active ─────────────► Disposed
//!     │
//!     ├── stream exhausted, on_done fired ──► Completed
//!     └── error delivered, on_error fired ──► Errored
//! ```
//! All three outcomes are terminal; the first transition wins.
//!
//! ## Rules
//! - [`Subscription::dispose`] is idempotent and never fails.
//! - Disposal is cooperative: a handler already running finishes, but no new
//!   emission is dispatched afterwards.
//! - Dropping a `Subscription` does **not** dispose it; the dispatch task keeps
//!   running until the stream ends.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

/// Lifecycle state of a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Dispatch loop is running.
    Active,
    /// Stopped by [`Subscription::dispose`]; no handler was called for it.
    Disposed,
    /// Stream exhausted; `on_done` was delivered.
    Completed,
    /// Error emission delivered to `on_error`.
    Errored,
}

impl SubscriptionState {
    fn as_u8(self) -> u8 {
        match self {
            SubscriptionState::Active => 0,
            SubscriptionState::Disposed => 1,
            SubscriptionState::Completed => 2,
            SubscriptionState::Errored => 3,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => SubscriptionState::Disposed,
            2 => SubscriptionState::Completed,
            3 => SubscriptionState::Errored,
            _ => SubscriptionState::Active,
        }
    }

    /// True for every state except [`Active`](SubscriptionState::Active).
    pub fn is_terminal(self) -> bool {
        !matches!(self, SubscriptionState::Active)
    }
}

/// Handle returned by `Observable::subscribe`.
///
/// Cheap to clone; clones control the same subscription.
#[derive(Clone, Debug)]
pub struct Subscription {
    state: Arc<AtomicU8>,
    cancel: CancellationToken,
    producer: Option<CancellationToken>,
    finished: CancellationToken,
}

impl Subscription {
    /// Creates an active subscription, optionally linked to a producer token.
    pub(crate) fn new(producer: Option<CancellationToken>) -> Self {
        Self {
            state: Arc::new(AtomicU8::new(SubscriptionState::Active.as_u8())),
            cancel: CancellationToken::new(),
            producer,
            finished: CancellationToken::new(),
        }
    }

    /// Signal polled by the dispatch loop.
    pub(crate) fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Guard held by the dispatch task; releases `finished()` waiters on drop.
    pub(crate) fn finished_guard(&self) -> DropGuard {
        self.finished.clone().drop_guard()
    }

    /// Moves `Active → to`. Returns `false` if another terminal state won.
    pub(crate) fn finish(&self, to: SubscriptionState) -> bool {
        self.state
            .compare_exchange(
                SubscriptionState::Active.as_u8(),
                to.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Requests the dispatch loop (and a linked producer) to stop.
    ///
    /// Safe to call any number of times, from any thread.
    pub fn dispose(&self) {
        if self.finish(SubscriptionState::Disposed) {
            debug!(linked = self.producer.is_some(), "subscription disposed");
        }
        self.cancel.cancel();
        if let Some(producer) = &self.producer {
            producer.cancel();
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SubscriptionState {
        SubscriptionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// True if this subscription ended through [`dispose`](Self::dispose).
    pub fn is_disposed(&self) -> bool {
        self.state() == SubscriptionState::Disposed
    }

    /// Resolves once the dispatch task has exited, for any terminal reason.
    ///
    /// After disposal this may lag slightly behind [`state`](Self::state) if
    /// a handler was mid-call.
    pub async fn finished(&self) {
        self.finished.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_twice_same_as_once() {
        let producer = CancellationToken::new();
        let sub = Subscription::new(Some(producer.clone()));

        sub.dispose();
        sub.dispose();

        assert_eq!(sub.state(), SubscriptionState::Disposed);
        assert!(sub.cancel_token().is_cancelled());
        assert!(producer.is_cancelled());
    }

    #[test]
    fn test_first_terminal_state_wins() {
        let sub = Subscription::new(None);
        assert!(sub.finish(SubscriptionState::Completed));
        assert!(!sub.finish(SubscriptionState::Errored));

        sub.dispose();
        assert_eq!(sub.state(), SubscriptionState::Completed);
        assert!(!sub.is_disposed());
        assert!(sub.state().is_terminal());
    }

    #[test]
    fn test_unlinked_dispose_leaves_no_producer() {
        let sub = Subscription::new(None);
        let clone = sub.clone();
        clone.dispose();
        assert!(sub.is_disposed());
    }

    #[tokio::test]
    async fn test_finished_released_by_guard() {
        let sub = Subscription::new(None);
        let guard = sub.finished_guard();
        drop(guard);
        sub.finished().await;
    }
}
