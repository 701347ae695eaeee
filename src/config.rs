//! # Buffering configuration for creation operators.
//!
//! Provides [`Config`] the channel sizing used by operators whose item count is
//! not known up front.
//!
//! ## Buffering policy per operator
//! | Operator     | Channel capacity                                  |
//! |--------------|---------------------------------------------------|
//! | `just`       | number of values                                  |
//! | `range`      | `min(end - start, max_finite_capacity)`           |
//! | `start`      | number of directives                              |
//! | `empty`      | 1 (closed immediately)                            |
//! | `create`     | `create_capacity`                                 |
//! | `from_pull`  | `pull_capacity`                                   |
//! | `interval`   | 1 (a disposed-but-unread stream never backs up)   |
//!
//! A slow or absent consumer fills the channel and the producer then waits on
//! its next push.
//!
//! ## Sentinel values
//! Capacities of `0` are clamped to `1` by the accessors.

/// Channel sizing for creation operators.
///
/// All fields are public. Prefer the `*_clamped` accessors over reading the
/// fields directly so the minimum of 1 is applied in one place.
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity of streams built by `Observable::create_with`.
    ///
    /// The directive may emit any number of items, so the default is a
    /// minimal handoff.
    pub create_capacity: usize,

    /// Capacity of streams built by `Observable::from_pull_with`.
    pub pull_capacity: usize,

    /// Upper bound on the buffer `Observable::range_with` sizes from its
    /// item count.
    pub max_finite_capacity: usize,
}

impl Config {
    /// Returns `create_capacity` clamped to a minimum of 1.
    #[inline]
    pub fn create_capacity_clamped(&self) -> usize {
        self.create_capacity.max(1)
    }

    /// Returns `pull_capacity` clamped to a minimum of 1.
    #[inline]
    pub fn pull_capacity_clamped(&self) -> usize {
        self.pull_capacity.max(1)
    }

    /// Sizes a finite stream of `count` items: `count`, bounded by
    /// `max_finite_capacity`, never below 1.
    #[inline]
    pub fn finite_capacity(&self, count: u64) -> usize {
        let limit = self.max_finite_capacity.max(1);
        usize::try_from(count).unwrap_or(usize::MAX).clamp(1, limit)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `create_capacity = 1`
    /// - `pull_capacity = 1`
    /// - `max_finite_capacity = 1024`
    fn default() -> Self {
        Self {
            create_capacity: 1,
            pull_capacity: 1,
            max_finite_capacity: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacities_clamp_to_one() {
        let cfg = Config {
            create_capacity: 0,
            pull_capacity: 0,
            max_finite_capacity: 0,
        };
        assert_eq!(cfg.create_capacity_clamped(), 1);
        assert_eq!(cfg.pull_capacity_clamped(), 1);
        assert_eq!(cfg.finite_capacity(10), 1);
    }

    #[test]
    fn test_finite_capacity_follows_count() {
        let cfg = Config::default();
        assert_eq!(cfg.finite_capacity(0), 1);
        assert_eq!(cfg.finite_capacity(4), 4);
        assert_eq!(cfg.finite_capacity(1024), 1024);
    }

    #[test]
    fn test_finite_capacity_bounded_by_max() {
        let cfg = Config::default();
        assert_eq!(cfg.finite_capacity(1_000_000), 1024);
        assert_eq!(cfg.finite_capacity(u64::MAX), 1024);
    }
}
