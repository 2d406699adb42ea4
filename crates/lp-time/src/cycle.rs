//! `Cycle` — a yearly planning period anchored to one year.

use crate::date::Date;
use crate::month_day::MonthDay;
use lp_core::errors::Result;

/// A planning cycle: a start and end month/day pair anchored to a year.
///
/// The anchor year dates the start boundary.  The end boundary lands in
/// the same year when its month is not before the start month, and rolls
/// into the following year otherwise, so `Cycle::new(2025, apr1, mar31)`
/// runs 2025-04-01 to 2026-03-31.
///
/// A cycle itself places no ordering constraint on its boundaries; a
/// planner built over one rejects cycles that do not end strictly after
/// they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cycle {
    year: i32,
    from: MonthDay,
    until: MonthDay,
}

impl Cycle {
    /// Create a cycle from an anchor year and its two boundaries.
    pub fn new(year: i32, from: MonthDay, until: MonthDay) -> Self {
        Cycle { year, from, until }
    }

    /// The familiar January 1 to December 31 cycle of `year`.
    pub fn calendar_year(year: i32) -> Self {
        Cycle::new(
            year,
            MonthDay::new_unchecked(1, 1),
            MonthDay::new_unchecked(12, 31),
        )
    }

    /// Return the anchor year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the start boundary.
    pub fn from(&self) -> MonthDay {
        self.from
    }

    /// Return the end boundary.
    pub fn until(&self) -> MonthDay {
        self.until
    }

    /// Resolve the start boundary against the anchor year.
    pub fn start(&self) -> Result<Date> {
        self.from.in_year(self.year)
    }

    /// Resolve the end boundary, rolling into the next year when its month
    /// precedes the start month.
    pub fn end(&self) -> Result<Date> {
        let year = if self.from.month() <= self.until.month() {
            self.year
        } else {
            self.year + 1
        };
        self.until.in_year(year)
    }

    /// Return `end - start` in days (the span minus one; negative when the
    /// boundaries are misordered).
    pub fn duration_days(&self) -> Result<i32> {
        Ok(self.end()? - self.start()?)
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} .. {}", self.year, self.from, self.until)
    }
}
