//! # Function-backed directive (`DirectiveFn`)
//!
//! [`DirectiveFn`] wraps a closure `F: Fn() -> Fut`, producing a fresh future
//! per run. Closures of different types can share one `Vec<DirectiveRef<T>>`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use rxflow::{DirectiveFn, DirectiveRef, Emitter};
//!
//! let fast: DirectiveRef<u32> = DirectiveFn::arc(|| async { Emitter::value(1) });
//! let slow: DirectiveRef<u32> = DirectiveFn::arc(|| async {
//!     tokio::time::sleep(Duration::from_millis(10)).await;
//!     Emitter::value(2)
//! });
//! let directives = vec![fast, slow];
//! assert_eq!(directives.len(), 2);
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::directives::Directive;
use crate::events::Emitter;

/// Function-backed directive implementation.
#[derive(Debug)]
pub struct DirectiveFn<F> {
    f: F,
}

impl<F> DirectiveFn<F> {
    /// Creates a new function-backed directive.
    ///
    /// Prefer [`DirectiveFn::arc`] when you immediately need a
    /// [`DirectiveRef`](crate::DirectiveRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the directive and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<T, F, Fut> Directive<T> for DirectiveFn<F>
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Emitter<T>> + Send + 'static,
{
    async fn run(&self) -> Emitter<T> {
        (self.f)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::DirectiveRef;

    #[tokio::test]
    async fn test_runs_closure_each_time() {
        let d: DirectiveRef<&'static str> = DirectiveFn::arc(|| async { Emitter::value("hi") });
        assert_eq!(d.run().await.into_result().unwrap(), "hi");
        assert_eq!(d.run().await.into_result().unwrap(), "hi");
    }

    #[tokio::test]
    async fn test_error_directive() {
        let d: DirectiveRef<u8> = DirectiveFn::arc(|| async { Emitter::error("timeout") });
        assert!(d.run().await.is_error());
    }
}
