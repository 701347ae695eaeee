//! # Observable: an eager stream with pull and push consumption.
//!
//! An [`Observable`] couples one [`EventStream`] with one [`Notifier`] and the
//! producer tasks feeding the stream. It is built by exactly one creation
//! operator (see `operators.rs`), which starts production immediately.
//!
//! ## Consumption
//! ```text
//! pull:  next().await ─────────────────────────────► Emitter | EndOfStream
//! push:  subscribe(observer) ──► spawn dispatch ──► Subscription (returned at once)
//!                                     └─► on_next* → on_done | on_error
//! ```
//!
//! ## Rules
//! - **Non-blocking subscribe**: `subscribe` validates, spawns, and returns; it
//!   never waits on the dispatch task.
//! - **Single effective consumer**: two subscriptions (or a subscription and
//!   `next`) race for the same items. There is no multicast.
//! - **Eager production**: producers run whether or not anyone subscribes.

use std::fmt;

use futures::Stream;

use crate::core::dispatch::dispatch;
use crate::core::{Notifier, Producers, Subscription};
use crate::error::RxError;
use crate::events::{Emitter, EventStream};
use crate::observers::Observer;

/// Eager asynchronous sequence of [`Emitter`]s.
pub struct Observable<T> {
    stream: EventStream<T>,
    notifier: Notifier,
    producers: Producers,
    /// Disposing a subscription also cancels production.
    linked: bool,
}

impl<T: Send + 'static> Observable<T> {
    /// Assembles an observable around an already-fed stream.
    ///
    /// Seals `producers`: the operator must have spawned everything by now.
    pub(crate) fn from_parts(stream: EventStream<T>, producers: Producers, linked: bool) -> Self {
        producers.seal();
        Self {
            stream,
            notifier: Notifier::new(),
            producers,
            linked,
        }
    }

    /// Pulls the next emitter (pull mode).
    ///
    /// Returns [`RxError::EndOfStream`] once the stream is exhausted, and
    /// marks the notifier done at that point.
    pub async fn next(&self) -> Result<Emitter<T>, RxError> {
        let res = self.stream.next().await;
        if res.is_err() {
            self.notifier.mark_done();
        }
        res
    }

    /// Starts push-mode consumption.
    ///
    /// Spawns a dispatch task that feeds `observer` and returns immediately.
    ///
    /// # Errors
    /// [`RxError::InvalidObserver`] if `observer` has no handler set; no task
    /// is spawned in that case.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn subscribe(&self, observer: Observer<T>) -> Result<Subscription, RxError> {
        if observer.is_empty() {
            return Err(RxError::InvalidObserver);
        }
        let producer = self.linked.then(|| self.producers.token().clone());
        let sub = Subscription::new(producer);

        tokio::spawn(dispatch(
            self.stream.clone(),
            observer,
            sub.clone(),
            self.notifier.clone(),
        ));
        Ok(sub)
    }

    /// Lifecycle signal, marked done when a subscription completes or errors,
    /// or when a pull consumer reaches the end of the stream. Disposal never
    /// marks it.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub(crate) fn producers(&self) -> &Producers {
        &self.producers
    }

    /// True while any producer task of this observable is still running.
    pub fn is_producing(&self) -> bool {
        self.producers.is_running()
    }

    /// Resolves once every producer task of this observable has exited.
    pub async fn producers_finished(&self) {
        self.producers.finished().await;
    }

    /// Converts into a [`Stream`] of emitters that ends at exhaustion.
    ///
    /// Reaching the end marks the notifier, same as [`next`](Self::next).
    pub fn into_stream(self) -> impl Stream<Item = Emitter<T>> + Send + 'static {
        let Self {
            stream, notifier, ..
        } = self;
        futures::stream::unfold((stream, notifier), |(stream, notifier)| async move {
            match stream.next().await {
                Ok(emitter) => Some((emitter, (stream, notifier))),
                Err(_) => {
                    notifier.mark_done();
                    None
                }
            }
        })
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("done", &self.notifier.is_done())
            .field("linked", &self.linked)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crate::core::SubscriptionState;

    #[tokio::test]
    async fn test_subscribe_rejects_empty_observer() {
        let source = Observable::just(vec![1, 2, 3]);
        let err = source.subscribe(Observer::new()).unwrap_err();
        assert_eq!(err, RxError::InvalidObserver);

        assert_eq!(source.next().await.unwrap().into_result().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_next_pulls_in_order_then_end() {
        let source = Observable::just(vec!['R', 'x', 'G', 'o']);
        let mut out = String::new();
        while let Ok(e) = source.next().await {
            out.push(e.into_result().unwrap());
        }
        assert_eq!(out, "RxGo");
        assert_eq!(source.next().await.unwrap_err(), RxError::EndOfStream);
    }

    #[tokio::test]
    async fn test_pull_exhaustion_marks_notifier() {
        let source = Observable::just(vec![1, 2]);
        assert!(!source.notifier().is_done());
        while source.next().await.is_ok() {}

        tokio::time::timeout(Duration::from_secs(1), source.notifier().done())
            .await
            .expect("notifier released");
    }

    #[tokio::test]
    async fn test_into_stream_exhaustion_marks_notifier() {
        let source = Observable::range(0, 3);
        let notifier = source.notifier().clone();
        let count = source.into_stream().count().await;

        assert_eq!(count, 3);
        assert!(notifier.is_done());
    }

    #[tokio::test]
    async fn test_notifier_marked_on_completion() {
        let source = Observable::range(1, 10);
        let sub = source.subscribe(Observer::new().on_next(|_| {})).unwrap();
        tokio::time::timeout(Duration::from_secs(1), source.notifier().done())
            .await
            .expect("notifier released");
        sub.finished().await;

        assert_eq!(sub.state(), SubscriptionState::Completed);
        assert!(!source.notifier().mark_done());
    }

    #[tokio::test]
    async fn test_notifier_not_marked_on_dispose() {
        let source = Observable::interval(Duration::from_secs(60));
        let sub = source.subscribe(Observer::new().on_next(|_| {})).unwrap();
        sub.dispose();
        sub.finished().await;

        assert!(sub.is_disposed());
        assert!(!source.notifier().is_done());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dispose_after_on_done_keeps_completed() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let observer = Observer::new().on_done(move || {
            let _ = tx.send(());
            std::thread::sleep(Duration::from_millis(100));
        });

        let source = Observable::just(vec![1]);
        let sub = source.subscribe(observer).unwrap();
        rx.await.unwrap();
        sub.dispose();
        sub.finished().await;

        assert_eq!(sub.state(), SubscriptionState::Completed);
        assert!(source.notifier().is_done());
    }

    #[tokio::test]
    async fn test_handler_panic_is_isolated() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let d = Arc::clone(&seen);
        let observer = Observer::new()
            .on_next(move |v: i32| {
                if v == 2 {
                    panic!("handler bug");
                }
                s.lock().unwrap().push(v);
            })
            .on_done(move || d.lock().unwrap().push(0));

        let sub = Observable::just(vec![1, 2, 3]).subscribe(observer).unwrap();
        sub.finished().await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 3, 0]);
        assert_eq!(sub.state(), SubscriptionState::Completed);
    }

    #[tokio::test]
    async fn test_into_stream_collects_values() {
        let values: Vec<i64> = Observable::range(0, 4)
            .into_stream()
            .filter_map(|e| async move { e.into_result().ok() })
            .collect()
            .await;
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_concurrent_subscribers_split_items() {
        let source = Observable::range(0, 100);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut subs = Vec::new();
        for _ in 0..2 {
            let s = Arc::clone(&seen);
            subs.push(
                source
                    .subscribe(Observer::new().on_next(move |v| s.lock().unwrap().push(v)))
                    .unwrap(),
            );
        }
        for sub in &subs {
            sub.finished().await;
        }

        let mut all = seen.lock().unwrap().clone();
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<_>>());
    }
}
