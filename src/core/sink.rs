//! # Sink: the emitting capability handed to a `create` directive.
//!
//! A [`Sink`] pushes values and errors into the observable's stream. The
//! stream closes once every sink clone is dropped, which normally happens
//! when the directive returns.
//!
//! ## Rules
//! - Emitting waits while the stream buffer is full (backpressure).
//! - Once a linked subscription is disposed, or the stream is dropped,
//!   emitting fails with [`RxError::Closed`]; directives should then return.

use tokio::select;
use tokio_util::sync::CancellationToken;

use crate::error::{BoxError, RxError};
use crate::events::{Emitter, EventSender};

/// Producer-side handle of a `create` stream.
#[derive(Debug)]
pub struct Sink<T> {
    tx: EventSender<T>,
    token: CancellationToken,
}

impl<T> Clone for Sink<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            token: self.token.clone(),
        }
    }
}

impl<T: Send + 'static> Sink<T> {
    pub(crate) fn new(tx: EventSender<T>, token: CancellationToken) -> Self {
        Self { tx, token }
    }

    /// Emits a value.
    pub async fn next(&self, value: T) -> Result<(), RxError> {
        self.emit(Emitter::Value(value)).await
    }

    /// Emits an error. Subscribers stop after delivering it.
    pub async fn error(&self, err: impl Into<BoxError>) -> Result<(), RxError> {
        self.emit(Emitter::Error(err.into())).await
    }

    /// Emits a prepared emitter.
    pub async fn emit(&self, emitter: Emitter<T>) -> Result<(), RxError> {
        if self.token.is_cancelled() {
            return Err(RxError::Closed);
        }
        select! {
            biased;
            _ = self.token.cancelled() => Err(RxError::Closed),
            res = self.tx.send(emitter) => res.map_err(|_| RxError::Closed),
        }
    }

    /// True once emitting can no longer succeed.
    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled() || self.tx.is_closed()
    }

    /// Resolves once emitting can no longer succeed.
    pub async fn closed(&self) {
        select! {
            _ = self.token.cancelled() => {}
            _ = self.tx.closed() => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventStream;

    #[tokio::test]
    async fn test_emits_in_order() {
        let (tx, stream) = EventStream::channel(4);
        let sink = Sink::new(tx, CancellationToken::new());
        sink.next(1).await.unwrap();
        sink.error("bad").await.unwrap();
        drop(sink);

        assert_eq!(stream.next().await.unwrap().into_result().unwrap(), 1);
        assert!(stream.next().await.unwrap().is_error());
        assert_eq!(stream.next().await.unwrap_err(), RxError::EndOfStream);
    }

    #[tokio::test]
    async fn test_cancelled_sink_rejects() {
        let token = CancellationToken::new();
        let (tx, _stream) = EventStream::<u8>::channel(1);
        let sink = Sink::new(tx, token.clone());
        assert!(!sink.is_closed());

        token.cancel();
        assert!(sink.is_closed());
        assert_eq!(sink.next(1).await, Err(RxError::Closed));
        sink.closed().await;
    }

    #[tokio::test]
    async fn test_dropped_stream_rejects() {
        let (tx, stream) = EventStream::<u8>::channel(1);
        let sink = Sink::new(tx, CancellationToken::new());
        drop(stream);
        assert_eq!(sink.next(1).await, Err(RxError::Closed));
        sink.closed().await;
    }
}
