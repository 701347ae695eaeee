//! # Directive abstraction.
//!
//! A [`Directive`] is a zero-argument async producer that yields exactly one
//! [`Emitter`]. `Observable::start` runs each directive in its own task and
//! forwards the results in **completion order**.
//!
//! # Example
//! ```
//! use async_trait::async_trait;
//! use rxflow::{Directive, Emitter};
//!
//! struct Lookup;
//!
//! #[async_trait]
//! impl Directive<String> for Lookup {
//!     async fn run(&self) -> Emitter<String> {
//!         // do work...
//!         Emitter::value("found".to_string())
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::events::Emitter;

/// # Asynchronous single-result producer.
#[async_trait]
pub trait Directive<T>: Send + Sync + 'static {
    /// Produces the directive's one emission (a value or an error).
    async fn run(&self) -> Emitter<T>;
}

/// Shared handle to a directive.
pub type DirectiveRef<T> = Arc<dyn Directive<T>>;
