//! # EventStream: the channel backing an observable.
//!
//! [`EventStream`] is the receiving half of a bounded [`tokio::sync::mpsc`]
//! channel of [`Emitter`]s. Exactly one producer context feeds it and closes
//! it (by dropping its sender) when production ends.
//!
//! ## Rules
//! - **Single effective consumer**: clones share one receiver behind a mutex.
//!   Two concurrent readers race for the same items; there is no fan-out.
//! - **Exhaustion is a signal**: once closed and drained, [`EventStream::next`]
//!   returns [`RxError::EndOfStream`], never a user error.
//! - **Bounded**: a full channel makes the producer wait on its next push.
//!
//! ## Construction
//! ```text
//! new(emitters)     pusher task ──► [cap = len] ──► next()
//! from_pull(src)    blocking pump ─► [cap = pull_capacity] ──► next()
//!                     └─ first pull error: close (not forwarded)
//! ```

use std::fmt;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tracing::debug;

use crate::core::Producers;
use crate::error::RxError;
use crate::events::{Emitter, Pull};

/// Producer handle of an [`EventStream`].
pub(crate) type EventSender<T> = mpsc::Sender<Emitter<T>>;

/// Ordered, bounded channel of emitters.
pub(crate) struct EventStream<T> {
    rx: Arc<Mutex<mpsc::Receiver<Emitter<T>>>>,
}

impl<T> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T> fmt::Debug for EventStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> EventStream<T> {
    /// Creates an open stream and its sender.
    ///
    /// The capacity is clamped to a minimum of 1.
    pub(crate) fn channel(capacity: usize) -> (EventSender<T>, Self) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            tx,
            Self {
                rx: Arc::new(Mutex::new(rx)),
            },
        )
    }

    /// Finite stream: a pusher task sends `emitters` in order, then closes.
    ///
    /// The buffer holds every item, so the pusher never waits on a consumer.
    /// With no emitters, the stream is closed right away and no task runs.
    pub(crate) fn new(producers: &Producers, emitters: Vec<Emitter<T>>) -> Self {
        let (tx, stream) = Self::channel(emitters.len());
        if emitters.is_empty() {
            return stream;
        }
        producers.spawn(async move {
            for emitter in emitters {
                if tx.send(emitter).await.is_err() {
                    debug!("event stream dropped before all emitters were pushed");
                    break;
                }
            }
        });
        stream
    }

    /// Stream pumped from an external [`Pull`] source on a blocking thread.
    ///
    /// Each successful pull becomes one value. The first pull error ends the
    /// stream; it is logged and swallowed.
    pub(crate) fn from_pull<P>(producers: &Producers, capacity: usize, src: P) -> Self
    where
        P: Pull<Item = T>,
    {
        let (tx, stream) = Self::channel(capacity);
        producers.spawn_blocking(move || {
            let mut src = src;
            loop {
                if tx.is_closed() {
                    debug!("pull source abandoned: stream dropped");
                    break;
                }
                match src.pull() {
                    Ok(item) => {
                        if tx.blocking_send(Emitter::Value(item)).is_err() {
                            debug!("pull source abandoned: stream dropped");
                            break;
                        }
                    }
                    Err(err) => {
                        debug!(reason = %err, "pull source exhausted");
                        break;
                    }
                }
            }
        });
        stream
    }

    /// Pulls the next emitter, waiting until one is available.
    ///
    /// Returns [`RxError::EndOfStream`] once the stream is closed and drained.
    pub(crate) async fn next(&self) -> Result<Emitter<T>, RxError> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(RxError::EndOfStream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;

    async fn drain(stream: &EventStream<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Ok(e) = stream.next().await {
            out.push(e.into_result().expect("value"));
        }
        out
    }

    #[tokio::test]
    async fn test_new_preserves_argument_order() {
        let producers = Producers::new();
        let stream = EventStream::new(
            &producers,
            vec![Emitter::value(3), Emitter::value(1), Emitter::value(2)],
        );
        assert_eq!(drain(&stream).await, vec![3, 1, 2]);
        assert_eq!(stream.next().await.unwrap_err(), RxError::EndOfStream);
    }

    #[tokio::test]
    async fn test_new_without_emitters_is_closed() {
        let producers = Producers::new();
        producers.seal();
        let stream: EventStream<i32> = EventStream::new(&producers, Vec::new());
        assert_eq!(stream.next().await.unwrap_err(), RxError::EndOfStream);
        assert!(!producers.is_running());
    }

    struct FailsAfter {
        items: std::vec::IntoIter<i32>,
    }

    impl Pull for FailsAfter {
        type Item = i32;

        fn pull(&mut self) -> Result<i32, BoxError> {
            self.items.next().ok_or_else(|| "connection reset".into())
        }
    }

    #[tokio::test]
    async fn test_from_pull_treats_error_as_end() {
        let producers = Producers::new();
        let src = FailsAfter {
            items: vec![7, 8, 9].into_iter(),
        };
        let stream = EventStream::from_pull(&producers, 1, src);
        assert_eq!(drain(&stream).await, vec![7, 8, 9]);

        producers.seal();
        producers.finished().await;
    }

    #[tokio::test]
    async fn test_from_pull_stops_when_stream_dropped() {
        let producers = Producers::new();
        let stream = EventStream::from_pull(&producers, 1, 0..);
        assert_eq!(stream.next().await.unwrap().into_result().unwrap(), 0);
        drop(stream);

        producers.seal();
        producers.finished().await;
    }
}
