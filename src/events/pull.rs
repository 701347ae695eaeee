//! # Pull-based item source consumed by `from_pull`.
//!
//! [`Pull`] is the iterator protocol the `from_pull` operator drains: each
//! call either yields the next item or returns an error. The error means
//! "no more items" — it ends the stream and is **never** forwarded as an
//! error emission, whatever its cause.
//!
//! Every `std::iter::Iterator` is a [`Pull`] source; exhaustion is reported as
//! [`RxError::EndOfStream`].
//!
//! ## Example
//! ```rust
//! use rxflow::{BoxError, Pull};
//!
//! struct Countdown(u32);
//!
//! impl Pull for Countdown {
//!     type Item = u32;
//!
//!     fn pull(&mut self) -> Result<u32, BoxError> {
//!         if self.0 == 0 {
//!             return Err("liftoff".into());
//!         }
//!         self.0 -= 1;
//!         Ok(self.0)
//!     }
//! }
//!
//! let mut c = Countdown(2);
//! assert_eq!(c.pull().unwrap(), 1);
//! assert_eq!(c.pull().unwrap(), 0);
//! assert!(c.pull().is_err());
//! ```

use crate::error::{BoxError, RxError};

/// External pull-based source.
///
/// `pull` runs on a blocking thread, so it may perform blocking I/O.
pub trait Pull: Send + 'static {
    /// Item type produced by this source.
    type Item: Send + 'static;

    /// Returns the next item, or an error once the source is done.
    fn pull(&mut self) -> Result<Self::Item, BoxError>;
}

impl<I> Pull for I
where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
{
    type Item = I::Item;

    fn pull(&mut self) -> Result<Self::Item, BoxError> {
        self.next().ok_or_else(|| RxError::EndOfStream.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterator_exhaustion_is_end_of_stream() {
        let mut it = vec![1, 2].into_iter();
        assert_eq!(it.pull().unwrap(), 1);
        assert_eq!(it.pull().unwrap(), 2);

        let err = it.pull().unwrap_err();
        assert_eq!(err.downcast_ref::<RxError>(), Some(&RxError::EndOfStream));
    }
}
