//! `MonthDay` — a recurring month/day pair with no year attached.

use crate::date::Date;
use lp_core::ensure;
use lp_core::errors::{Error, Result};

/// A month/day pair, used for dates that recur every year (cycle
/// boundaries, credit dates, leave-constraint exclusions).
///
/// Construction checks field ranges only: the month must be 1–12 and the
/// day 1–31.  Whether the pair exists in a particular year is deliberately
/// left open until [`MonthDay::in_year`] resolves it against one, so
/// `MonthDay::new(2, 30)` succeeds and `in_year(2025)` is what fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Create a month/day pair from a month (1–12) and a day (1–31).
    pub fn new(month: u8, day: u8) -> Result<Self> {
        ensure!((1..=12).contains(&month), Error::MonthOutOfRange { month });
        ensure!((1..=31).contains(&day), Error::DayOutOfRange { day });
        Ok(MonthDay { month, day })
    }

    /// Create a month/day pair from (unchecked) components.
    pub(crate) fn new_unchecked(month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month) && (1..=31).contains(&day));
        MonthDay { month, day }
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Resolve this pair against a concrete year.
    ///
    /// Returns [`Error::InvalidDateComponents`] if the pair names no real
    /// day of that year (February 30 in any year, February 29 outside
    /// leap years).
    pub fn in_year(&self, year: i32) -> Result<Date> {
        Date::from_ymd(year, self.month, self.day)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
