//! Error types for leaveplan-rs.
//!
//! Every fallible operation in the workspace reports through the single
//! `thiserror`-derived enum below.  Validation happens once, at
//! construction time; later stages may assume the invariants hold and
//! propagate errors unchanged with `?`.

use thiserror::Error;

use crate::Balance;

/// The top-level error type used throughout leaveplan-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A weekday index outside the `0 = Monday .. 6 = Sunday` numbering.
    #[error("invalid weekday index {value}: expected 0 (Monday) through 6 (Sunday)")]
    InvalidWeekday {
        /// The rejected index.
        value: u8,
    },

    /// A month number outside `1..=12`.
    #[error("month {month} out of range [1, 12]")]
    MonthOutOfRange {
        /// The rejected month number.
        month: u8,
    },

    /// A day-of-month outside `1..=31`.
    #[error("day of month {day} out of range [1, 31]")]
    DayOutOfRange {
        /// The rejected day number.
        day: u8,
    },

    /// A year outside the range representable by a day serial.
    #[error("year {year} is outside the supported date range")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// A day serial outside the representable range.
    #[error("day serial {serial} is outside the supported date range")]
    SerialOutOfRange {
        /// The rejected serial.
        serial: i32,
    },

    /// A month/day pair whose fields are individually in range but which
    /// names no real day of the given year (e.g. February 30).
    #[error("{year:04}-{month:02}-{day:02} does not exist in the calendar")]
    InvalidDateComponents {
        /// Year the pair was resolved against.
        year: i32,
        /// Month component.
        month: u8,
        /// Day component.
        day: u8,
    },

    /// A holiday priority outside `0..=5`.
    #[error("holiday priority {priority} out of range [0, 5]")]
    PriorityOutOfRange {
        /// The rejected priority.
        priority: u8,
    },

    /// A leave balance below zero.
    #[error("leave balance must be non-negative, got {balance}")]
    NegativeBalance {
        /// The rejected balance.
        balance: Balance,
    },

    /// A credit schedule whose date and balance sequences disagree in length.
    #[error("credit schedule mismatch: {dates} credit dates against {balances} balances")]
    InconsistentScheduleLength {
        /// Number of credit dates supplied.
        dates: usize,
        /// Number of credit balances supplied.
        balances: usize,
    },

    /// Clustering was requested for a person with no paid holidays at all.
    #[error("no paid holidays fall inside the planning period for {person}")]
    EmptyHolidaySet {
        /// Name of the person whose holiday set was empty.
        person: String,
    },

    /// A minimum cluster size of zero.
    #[error("minimum cluster size must be at least 1, got {size}")]
    InvalidClusterSize {
        /// The rejected size.
        size: usize,
    },

    /// A planning period that does not end strictly after it starts.
    #[error("planning period must end after it starts: {start} .. {end}")]
    InvalidPeriod {
        /// Resolved period start, rendered as `YYYY-MM-DD`.
        start: String,
        /// Resolved period end, rendered as `YYYY-MM-DD`.
        end: String,
    },

    /// Two roster entries sharing one name.
    #[error("duplicate person name: {name}")]
    DuplicatePersonName {
        /// The name that appeared more than once.
        name: String,
    },
}

/// Shorthand `Result` type used throughout leaveplan-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns early with the given error when `$cond` is false.
///
/// # Example
/// ```
/// use lp_core::{ensure, errors::Error};
/// fn weekday_index(value: u8) -> lp_core::errors::Result<u8> {
///     ensure!(value < 7, Error::InvalidWeekday { value });
///     Ok(value)
/// }
/// assert!(weekday_index(3).is_ok());
/// assert!(weekday_index(9).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}
