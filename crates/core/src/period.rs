//! Inclusive year-range filter used when listing works.

use crate::types::Year;

/// Symmetric bound used as the "unbounded" default on both ends.
pub const YEAR_LIMIT: Year = 99_999;

/// An inclusive `[start, end]` range of years.
///
/// The default range is `[-YEAR_LIMIT, YEAR_LIMIT]`, which callers treat as
/// "no filter". A range with `start > end` is valid and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: Year,
    pub end: Year,
}

impl YearRange {
    pub fn new(start: Year, end: Year) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::new(-YEAR_LIMIT, YEAR_LIMIT)
    }

    /// Both ends sit at their defaults.
    pub fn is_unbounded(&self) -> bool {
        *self == Self::unbounded()
    }

    pub fn contains(&self, year: Year) -> bool {
        self.start <= year && year <= self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::unbounded()
    }
}
