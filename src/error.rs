//! Error types used by the observable runtime.
//!
//! - [`RxError`] — errors raised by the runtime itself (stream exhaustion,
//!   malformed subscriptions, sends into a dead stream).
//! - [`BoxError`] — the payload of an error-tagged [`Emitter`](crate::Emitter),
//!   produced by user code (a `create` directive, a `start` directive) or an
//!   upstream [`Pull`](crate::Pull) source.
//!
//! User errors never become an [`RxError`]: they are delivered to the
//! observer's `on_error` handler and end that subscription.

use thiserror::Error;

/// Boxed user/upstream error carried by [`Emitter::Error`](crate::Emitter::Error).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by the observable runtime.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RxError {
    /// The stream is closed and drained.
    ///
    /// Returned by pull-mode [`Observable::next`](crate::Observable::next);
    /// the subscribe dispatch loop turns it into `on_done` instead.
    #[error("end of stream")]
    EndOfStream,

    /// [`Observable::subscribe`](crate::Observable::subscribe) was given an
    /// observer without a single handler.
    #[error("observer has no handlers set")]
    InvalidObserver,

    /// A producer tried to emit into a stream whose consumer side is gone or
    /// whose producer was cancelled by a disposed subscription.
    #[error("stream closed")]
    Closed,
}

impl RxError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use rxflow::RxError;
    ///
    /// assert_eq!(RxError::InvalidObserver.as_label(), "invalid_observer");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RxError::EndOfStream => "end_of_stream",
            RxError::InvalidObserver => "invalid_observer",
            RxError::Closed => "stream_closed",
        }
    }

    /// True for the exhaustion signal, which is not a failure.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, RxError::EndOfStream)
    }
}
