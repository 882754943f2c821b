//! Integer calendar date keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar date packed as `year * 10000 + month * 100 + day`.
///
/// The packed form sorts in calendar order, which is what makes it usable as
/// the search key for aligning chart series by date. A key built through
/// [`DateKey::from_ymd`] is range-checked but not validated against the
/// calendar; conversion back to a concrete date lives in `midas-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(i32);

impl DateKey {
    /// Wrap an already packed `YYYYMMDD` integer.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Pack year, month (1-12) and day (1-31).
    ///
    /// Returns `None` when month or day is out of range or the packed value
    /// does not fit in an `i32` (years beyond roughly ±214 000).
    #[must_use]
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if month == 0 || month > 12 || day == 0 || day > 31 {
            return None;
        }
        let Some(scaled) = year.checked_mul(10_000) else {
            return None;
        };
        match scaled.checked_add((month * 100 + day) as i32) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Returns the packed integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.0.div_euclid(10_000)
    }

    /// Month component (1-12 for a valid key).
    #[must_use]
    pub const fn month(self) -> u32 {
        (self.0.div_euclid(100).rem_euclid(100)) as u32
    }

    /// Day-of-month component (1-31 for a valid key).
    #[must_use]
    pub const fn day(self) -> u32 {
        self.0.rem_euclid(100) as u32
    }
}

impl From<i32> for DateKey {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<DateKey> for i32 {
    fn from(k: DateKey) -> Self {
        k.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
