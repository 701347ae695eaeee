//! # Dispatch loop: drains one stream into one observer.
//!
//! Spawned by `Observable::subscribe`; one task per subscription.
//!
//! ## Flow
//! ```text
//! loop {
//!   ├─► disposed?              → exit (no handler; state Disposed)
//!   ├─► next() (cancellable)
//!   │     ├─ Value(v)          → on_next(v), continue
//!   │     ├─ Error(e)          → on_error(e) → Errored, notifier done, exit
//!   │     └─ EndOfStream       → on_done()   → Completed, notifier done, exit
//! }
//! ```
//!
//! ## Rules
//! - Cancellation is checked before every pull and while waiting for one.
//! - Errors are terminal: nothing is pulled after an error emission.
//! - The terminal state is recorded before the terminal handler runs; a
//!   dispose that lands first suppresses the handler.
//! - Handler panics are caught and logged; the loop carries on.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tokio::select;
use tracing::{debug, error};

use crate::core::{Notifier, Subscription, SubscriptionState};
use crate::events::{Emitter, EventStream};
use crate::observers::Observer;

/// Runs until the stream ends, errors, or the subscription is disposed.
pub(crate) async fn dispatch<T: Send + 'static>(
    stream: EventStream<T>,
    mut observer: Observer<T>,
    sub: Subscription,
    notifier: Notifier,
) {
    let _finished = sub.finished_guard();
    let cancel = sub.cancel_token().clone();

    loop {
        if cancel.is_cancelled() {
            debug!("dispatch stopped: subscription disposed");
            return;
        }

        let pulled = select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("dispatch stopped: subscription disposed");
                return;
            }
            res = stream.next() => res,
        };

        match pulled {
            Ok(Emitter::Value(value)) => {
                guarded("on_next", || observer.handle_next(value));
            }
            Ok(Emitter::Error(err)) => {
                if !sub.finish(SubscriptionState::Errored) {
                    debug!("dispatch stopped: disposed before error delivery");
                    return;
                }
                guarded("on_error", || observer.handle_error(err));
                notifier.mark_done();
                debug!("dispatch finished: error delivered");
                return;
            }
            Err(_end) => {
                if !sub.finish(SubscriptionState::Completed) {
                    debug!("dispatch stopped: disposed before completion");
                    return;
                }
                guarded("on_done", || observer.handle_done());
                notifier.mark_done();
                debug!("dispatch finished: stream exhausted");
                return;
            }
        }
    }
}

/// Calls one handler, isolating a panic to that call.
fn guarded(slot: &'static str, f: impl FnOnce()) {
    if let Err(panic) = catch_unwind(AssertUnwindSafe(f)) {
        error!(
            handler = slot,
            panic = panic_message(panic.as_ref()),
            "observer handler panicked"
        );
    }
}

pub(crate) fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown"
    }
}
