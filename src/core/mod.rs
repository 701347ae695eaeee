//! Runtime core: observables, subscriptions and their tasks.
//!
//! The public API from this module is [`Observable`] (with its creation
//! operators), [`Subscription`], [`Notifier`] and the `create` [`Sink`].
//!
//! ## Wiring
//! ```text
//! operator ──► Producers (TaskTracker + token) ──► EventStream ──► Observable
//!                                                                     │
//!                        subscribe(observer) ──► dispatch task ◄──────┘
//!                                                   ├─► Observer handlers
//!                                                   ├─► Subscription state
//!                                                   └─► Notifier
//! ```
//!
//! Internal modules:
//! - [`dispatch`]: the loop that drains a stream into an observer;
//! - [`operators`]: creation operators (`create`, `just`, `start`, `interval`, ...);
//! - [`producers`]: tracked producer tasks and their cancellation token.

mod dispatch;
mod notifier;
mod observable;
mod operators;
mod producers;
mod sink;
mod subscription;

pub use notifier::Notifier;
pub use observable::Observable;
pub(crate) use producers::Producers;
pub use sink::Sink;
pub use subscription::{Subscription, SubscriptionState};
