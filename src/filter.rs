// src/filter.rs
const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Whole days elapsed between `modified` and `now`, both in Unix seconds.
///
/// Truncates toward zero, so a file modified in the future gets a negative
/// (or zero) age rather than being rounded.
#[inline]
#[must_use]
pub const fn age_in_days(now: i64, modified: i64) -> i64 {
    now.saturating_sub(modified) / SECONDS_PER_DAY
}

/// Inclusive age band (in days) built from `-s` and `-b`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AgeBand {
    /// `-s`: entries older than this are dropped.
    pub max: Option<i64>,
    /// `-b`: entries younger than this are dropped.
    pub min: Option<i64>,
}

impl AgeBand {
    pub const fn new(max: Option<i64>, min: Option<i64>) -> Self {
        Self { max, min }
    }

    /// Build a band from raw flag values, where 0 means "not set".
    pub fn from_flags(max: Option<i64>, min: Option<i64>) -> Self {
        Self::new(max.filter(|&d| d != 0), min.filter(|&d| d != 0))
    }

    pub const fn is_unbounded(&self) -> bool {
        self.max.is_none() && self.min.is_none()
    }

    #[inline]
    pub fn contains(&self, age_days: i64) -> bool {
        self.max.is_none_or(|m| age_days <= m) && self.min.is_none_or(|m| age_days >= m)
    }
}
