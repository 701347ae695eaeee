//! # Notifier: one-shot completion signal.
//!
//! [`Notifier`] records that an observable's lifecycle has ended, independent
//! of whether its channel is closed. Any number of waiters can observe it.
//!
//! ## Rules
//! - [`Notifier::mark_done`] is idempotent: the first call flips the state and
//!   releases every current and future waiter; later calls are no-ops.
//! - Waiters that arrive after the signal return immediately.
//!
//! ```text
//! mark_done() ──► done = true ──► token.cancel() ──► done().await resolves
//! mark_done() ──► (already done) ──► no-op
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct Inner {
    done: AtomicBool,
    signal: CancellationToken,
}

/// Idempotent broadcast-once completion flag.
///
/// Cheap to clone; clones share state.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    /// Creates a notifier in the "not done" state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the lifecycle as ended.
    ///
    /// Returns `true` for the call that performed the transition, `false` if
    /// the notifier was already done.
    pub fn mark_done(&self) -> bool {
        if self.inner.done.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.inner.signal.cancel();
        true
    }

    /// True once [`mark_done`](Self::mark_done) has been called.
    pub fn is_done(&self) -> bool {
        self.inner.done.load(Ordering::Acquire)
    }

    /// Waits until the notifier is marked done.
    pub async fn done(&self) {
        self.inner.signal.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_mark_done_twice_is_noop() {
        let n = Notifier::new();
        assert!(!n.is_done());
        assert!(n.mark_done());
        assert!(!n.mark_done());
        assert!(n.is_done());
    }

    #[tokio::test]
    async fn test_releases_waiters_before_and_after() {
        let n = Notifier::new();
        let early = {
            let n = n.clone();
            tokio::spawn(async move { n.done().await })
        };

        n.mark_done();
        n.mark_done();

        tokio::time::timeout(Duration::from_secs(1), early)
            .await
            .expect("early waiter released")
            .expect("waiter task");
        tokio::time::timeout(Duration::from_secs(1), n.done())
            .await
            .expect("late waiter released");
    }
}
