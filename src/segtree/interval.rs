use std::ops::RangeInclusive;

/// Inclusive index range `[l, r]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub l: usize,
    pub r: usize,
}

impl Interval {
    pub fn new(l: usize, r: usize) -> Self {
        Self { l, r }
    }

    /// Equivalent half-open bounds `(l, r + 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `r` is `usize::MAX`.
    pub fn half_open(&self) -> (usize, usize) {
        assert!(self.r < usize::MAX, "interval end {} overflows usize", self.r);
        (self.l, self.r + 1)
    }
}

impl From<RangeInclusive<usize>> for Interval {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}
