//! `Date` type.
//!
//! Dates are stored as a serial number of days, which makes the gap
//! arithmetic used by holiday clustering a plain integer subtraction.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2399-12-31.

use crate::weekday::Weekday;
use lp_core::ensure;
use lp_core::errors::{Error, Result};

/// Day serial, the linear ordinal behind a [`Date`].
pub type Serial = i32;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Serial);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2399.
    pub const MAX: Date = Date(182_621);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: Serial) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            Error::SerialOutOfRange { serial }
        );
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// Field ranges are checked first; a pair that is in range but names no
    /// real day of the year (e.g. February 30) is reported as
    /// [`Error::InvalidDateComponents`].
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1900..=2399).contains(&year),
            Error::YearOutOfRange { year }
        );
        ensure!((1..=12).contains(&month), Error::MonthOutOfRange { month });
        ensure!((1..=31).contains(&day), Error::DayOutOfRange { day });
        ensure!(
            day <= days_in_month(year, month),
            Error::InvalidDateComponents { year, month, day }
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> Serial {
        self.0
    }

    /// Return the year (1900–2399).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 is a Monday, so the offset from serial 1 mod 7 is
        // exactly the 0 = Monday .. 6 = Sunday index.
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Leap years in [1900, `year`), Gregorian rule.
fn leap_days_before(year: i32) -> i32 {
    let count = |y: i32| y / 4 - y / 100 + y / 400;
    count(year - 1) - count(1899)
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> Serial {
    let mut days = (year - 1900) * 365 + leap_days_before(year);
    days += DAYS_BEFORE_MONTH[month as usize - 1];
    if month > 2 && is_leap_year(year) {
        days += 1;
    }
    days + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: Serial) -> (i32, u8, u8) {
    // The estimate never overshoots (every year has at most 366 days),
    // and undershoots by at most two years over the supported range.
    let mut year = 1900 + (serial - 1) / 366;
    while serial >= serial_from_ymd(year + 1, 1, 1) {
        year += 1;
    }
    let mut remaining = serial - serial_from_ymd(year, 1, 1) + 1;
    let mut month = 1u8;
    while remaining > days_in_month(year, month) as i32 {
        remaining -= days_in_month(year, month) as i32;
        month += 1;
    }
    (year, month, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const DAYS_BEFORE_MONTH: [i32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
