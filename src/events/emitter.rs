//! # Emitter: one unit of a stream.
//!
//! An [`Emitter`] carries exactly one of a value or an error. It is immutable
//! once built; consumers take it apart by matching or with
//! [`Emitter::into_result`].
//!
//! ## Example
//! ```rust
//! use rxflow::Emitter;
//!
//! let ok: Emitter<u32> = Emitter::value(7);
//! assert_eq!(ok.as_value(), Some(&7));
//!
//! let failed: Emitter<u32> = Emitter::error("boom");
//! assert!(failed.is_error());
//! assert_eq!(failed.into_result().unwrap_err().to_string(), "boom");
//! ```

use std::fmt;

use crate::error::BoxError;

/// One emitted item: a value or an error, never both.
pub enum Emitter<T> {
    /// A regular item, delivered to `on_next`.
    Value(T),
    /// A terminal error, delivered to `on_error`.
    Error(BoxError),
}

impl<T> Emitter<T> {
    /// Wraps a value.
    pub fn value(value: T) -> Self {
        Emitter::Value(value)
    }

    /// Wraps an error. Accepts anything convertible into [`BoxError`],
    /// including `&str` and `String`.
    pub fn error(err: impl Into<BoxError>) -> Self {
        Emitter::Error(err.into())
    }

    /// True if this emitter carries a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Emitter::Value(_))
    }

    /// True if this emitter carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Emitter::Error(_))
    }

    /// Borrows the value, if any.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Emitter::Value(v) => Some(v),
            Emitter::Error(_) => None,
        }
    }

    /// Borrows the error, if any.
    pub fn as_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Emitter::Value(_) => None,
            Emitter::Error(e) => Some(e.as_ref()),
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<T, BoxError> {
        match self {
            Emitter::Value(v) => Ok(v),
            Emitter::Error(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for Emitter<T>
where
    E: Into<BoxError>,
{
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Emitter::Value(v),
            Err(e) => Emitter::Error(e.into()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emitter::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Emitter::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_never_error() {
        let e = Emitter::value("a");
        assert!(e.is_value());
        assert!(!e.is_error());
        assert!(e.as_error().is_none());
        assert_eq!(e.into_result().ok(), Some("a"));
    }

    #[test]
    fn test_error_keeps_message() {
        let e: Emitter<i32> = Emitter::error(String::from("disk gone"));
        assert!(e.is_error());
        assert!(e.as_value().is_none());
        assert_eq!(e.as_error().map(|e| e.to_string()), Some("disk gone".into()));
    }

    #[test]
    fn test_from_result() {
        let ok: Emitter<u8> = Ok::<u8, &str>(3).into();
        assert_eq!(ok.as_value(), Some(&3));

        let err: Emitter<u8> = Err::<u8, &str>("nope").into();
        assert_eq!(format!("{err:?}"), "Error(\"nope\")");
    }
}
