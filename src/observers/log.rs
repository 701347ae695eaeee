//! # LogWriter — simple stream printer
//!
//! Builds an [`Observer`] that prints every notification to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [next] source=ticks value=0
//! [next] source=ticks value=1
//! [error] source=fetch err="connection refused"
//! [done] source=ticks
//! ```

use std::fmt::Debug;

use crate::observers::Observer;

/// Stdout observer factory.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns an observer with all three slots set, tagging lines with `source`.
    pub fn observer<T>(&self, source: &'static str) -> Observer<T>
    where
        T: Debug + Send + 'static,
    {
        Observer::new()
            .on_next(move |v: T| println!("[next] source={source} value={v:?}"))
            .on_error(move |e| println!("[error] source={source} err={:?}", e.to_string()))
            .on_done(move || println!("[done] source={source}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_has_all_slots() {
        let o: Observer<u8> = LogWriter::new().observer("test");
        assert!(!o.is_empty());
        assert_eq!(
            format!("{o:?}"),
            "Observer { on_next: true, on_error: true, on_done: true }"
        );
    }
}
