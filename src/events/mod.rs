//! Stream data model: emitted items, the backing channel and pull sources.
//!
//! ## Contents
//! - [`Emitter`] one emitted unit (value or error)
//! - [`EventStream`] bounded single-consumer channel of emitters
//! - [`Pull`] external pull-based source consumed by `from_pull`
//!
//! See `core/mod.rs` for how observables wire producers to subscribers.

mod emitter;
mod pull;
mod stream;

pub use emitter::Emitter;
pub use pull::Pull;
pub(crate) use stream::EventSender;
pub(crate) use stream::EventStream;
