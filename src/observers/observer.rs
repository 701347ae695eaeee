//! # Observer: user-facing stream handlers
//!
//! An [`Observer`] is the sink of a subscription: up to three independent,
//! optional callbacks.
//!
//! | Slot       | Called with        | When                                  |
//! |------------|--------------------|---------------------------------------|
//! | `on_next`  | each value         | per value emission (repeatable)       |
//! | `on_error` | the error          | once, on an error emission (terminal) |
//! | `on_done`  | nothing            | once, when the stream is exhausted    |
//!
//! Any subset may be left unset; an unset slot silently absorbs its event. An
//! observer with **no** slot set is rejected by `subscribe`.
//!
//! Handlers run on the subscription's dispatch task, one at a time, in stream
//! order. They are plain synchronous closures: keep them short or hand heavy
//! work off to another task.
//!
//! # Example
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use rxflow::{Observable, Observer};
//!
//! # async fn demo() -> Result<(), rxflow::RxError> {
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let observer = Observer::new()
//!     .on_next(move |v: i32| sink.lock().unwrap().push(v))
//!     .on_done(|| println!("done"));
//!
//! let sub = Observable::just(vec![1, 2, 3]).subscribe(observer)?;
//! sub.finished().await;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::error::BoxError;

/// Value handler.
pub type NextFn<T> = Box<dyn FnMut(T) + Send + 'static>;
/// Error handler (called at most once).
pub type ErrorFn = Box<dyn FnOnce(BoxError) + Send + 'static>;
/// Completion handler (called at most once).
pub type DoneFn = Box<dyn FnOnce() + Send + 'static>;

/// Sink with three optional callback slots.
pub struct Observer<T> {
    next: Option<NextFn<T>>,
    error: Option<ErrorFn>,
    done: Option<DoneFn>,
}

impl<T> Observer<T> {
    /// Creates an observer with no handlers set.
    pub fn new() -> Self {
        Self {
            next: None,
            error: None,
            done: None,
        }
    }

    /// Sets the value handler.
    #[must_use]
    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        self.next = Some(Box::new(f));
        self
    }

    /// Sets the error handler.
    #[must_use]
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BoxError) + Send + 'static,
    {
        self.error = Some(Box::new(f));
        self
    }

    /// Sets the completion handler.
    #[must_use]
    pub fn on_done<F>(mut self, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.done = Some(Box::new(f));
        self
    }

    /// True if no handler is set.
    pub fn is_empty(&self) -> bool {
        self.next.is_none() && self.error.is_none() && self.done.is_none()
    }

    /// Delivers a value; no-op without an `on_next` handler.
    pub(crate) fn handle_next(&mut self, value: T) {
        if let Some(f) = self.next.as_mut() {
            f(value);
        }
    }

    /// Delivers the terminal error; dropped without an `on_error` handler.
    pub(crate) fn handle_error(&mut self, err: BoxError) {
        if let Some(f) = self.error.take() {
            f(err);
        }
    }

    /// Delivers completion; no-op without an `on_done` handler.
    pub(crate) fn handle_done(&mut self) {
        if let Some(f) = self.done.take() {
            f();
        }
    }
}

impl<T> Default for Observer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("on_next", &self.next.is_some())
            .field("on_error", &self.error.is_some())
            .field("on_done", &self.done.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_empty_observer() {
        let o: Observer<u8> = Observer::default();
        assert!(o.is_empty());
        assert!(!o.on_done(|| {}).is_empty());
    }

    #[test]
    fn test_unset_slots_absorb_events() {
        let mut o: Observer<u8> = Observer::new().on_done(|| {});
        o.handle_next(1);
        o.handle_error("ignored".into());
        o.handle_done();
    }

    #[test]
    fn test_terminal_handlers_fire_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let c1 = Arc::clone(&calls);
        let c2 = Arc::clone(&calls);
        let mut o: Observer<u8> = Observer::new()
            .on_error(move |e| c1.lock().unwrap().push(e.to_string()))
            .on_done(move || c2.lock().unwrap().push("done".into()));

        o.handle_error("first".into());
        o.handle_error("second".into());
        o.handle_done();
        o.handle_done();

        assert_eq!(*calls.lock().unwrap(), vec!["first", "done"]);
    }
}
