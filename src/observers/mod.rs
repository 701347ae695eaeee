//! # Observers: the consuming side of a subscription.
//!
//! ```text
//! Observable ──► dispatch task ──► Observer
//!                                   ├─► on_next(value)   (0..n times)
//!                                   ├─► on_error(err)    (terminal)
//!                                   └─► on_done()        (terminal)
//! ```
//!
//! Provided implementations:
//! - [`LogWriter`] (enabled via `logging` feature) → prints notifications to stdout

#[cfg(feature = "logging")]
mod log;
mod observer;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observer::{DoneFn, ErrorFn, NextFn, Observer};
