//! # lp-time
//!
//! Date serials, weekdays, recurring month/day pairs, planning cycles,
//! and day-by-day iteration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Cycle` — a yearly planning period anchored to one year.
pub mod cycle;

/// `Date` type.
pub mod date;

/// `MonthDay` — a recurring month/day pair.
pub mod month_day;

/// Inclusive iteration between two dates.
pub mod range;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cycle::Cycle;
pub use date::{Date, Serial};
pub use month_day::MonthDay;
pub use range::{date_range, DateRange};
pub use weekday::Weekday;
