//! Measurement domains: the accepted interval of a numeric field.

use std::ops::Bound;

/// Interval of accepted values, each end independently open or closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain<T> {
    low: Bound<T>,
    high: Bound<T>,
}

impl<T> Domain<T> {
    /// Creates a domain from explicit bounds.
    pub const fn new(low: Bound<T>, high: Bound<T>) -> Self {
        Self { low, high }
    }

    /// `(low, high)`
    pub const fn open(low: T, high: T) -> Self {
        Self::new(Bound::Excluded(low), Bound::Excluded(high))
    }

    /// `[low, high]`
    pub const fn closed(low: T, high: T) -> Self {
        Self::new(Bound::Included(low), Bound::Included(high))
    }

    /// `[low, high)`
    pub const fn closed_open(low: T, high: T) -> Self {
        Self::new(Bound::Included(low), Bound::Excluded(high))
    }

    /// `[low, +inf)`
    pub const fn at_least(low: T) -> Self {
        Self::new(Bound::Included(low), Bound::Unbounded)
    }
}

impl<T: PartialOrd> Domain<T> {
    /// Returns true if `value` lies inside the domain.
    ///
    /// Values that do not compare (NaN) are never contained.
    pub fn contains(&self, value: &T) -> bool {
        let above = match &self.low {
            Bound::Included(low) => value >= low,
            Bound::Excluded(low) => value > low,
            Bound::Unbounded => true,
        };
        let below = match &self.high {
            Bound::Included(high) => value <= high,
            Bound::Excluded(high) => value < high,
            Bound::Unbounded => true,
        };
        above && below
    }
}
