//! # Directives: single-result producers for `start`.
//!
//! This module provides the directive-related types:
//! - [`Directive`] - trait for async producers yielding exactly one [`Emitter`](crate::Emitter)
//! - [`DirectiveFn`] - closure-backed directive implementation
//! - [`DirectiveRef`] - shared reference to a directive (`Arc<dyn Directive<T>>`)

mod directive;
mod directive_fn;

pub use directive::{Directive, DirectiveRef};
pub use directive_fn::DirectiveFn;
