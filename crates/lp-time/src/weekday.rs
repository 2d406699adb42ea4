//! `Weekday` — day-of-week enum.

use lp_core::errors::{Error, Result};

/// Day of the week.
///
/// Variants are numbered 0–6 (Monday = 0, Sunday = 6).  The numbering is
/// part of the public contract: `Weekday::ALL[i].index() == i`, so callers
/// that accept raw weekday indices can validate them with
/// [`Weekday::from_index`] and never guess at the convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (0).
    Monday = 0,
    /// Tuesday (1).
    Tuesday = 1,
    /// Wednesday (2).
    Wednesday = 2,
    /// Thursday (3).
    Thursday = 3,
    /// Friday (4).
    Friday = 4,
    /// Saturday (5).
    Saturday = 5,
    /// Sunday (6).
    Sunday = 6,
}

impl Weekday {
    /// All weekdays in index order, so `ALL[i].index() == i`.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the index (0 = Monday … 6 = Sunday).
    pub fn from_index(value: u8) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidWeekday { value })
    }

    /// Return the index (0 = Monday … 6 = Sunday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}
