//! `WeeklyOff` — the fixed set of weekdays a person has off every week.

use std::collections::BTreeSet;

use lp_core::errors::Result;
use lp_time::Weekday;

/// The set of weekdays treated as non-working every week.
///
/// Defaults to Saturday and Sunday.  Day numbering follows the
/// [`Weekday`] convention (0 = Monday … 6 = Sunday); raw indices arriving
/// from an external boundary should come in through
/// [`WeeklyOff::from_indices`], which rejects out-of-range values instead
/// of guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyOff {
    days: BTreeSet<Weekday>,
}

impl Default for WeeklyOff {
    fn default() -> Self {
        WeeklyOff::new([Weekday::Saturday, Weekday::Sunday])
    }
}

impl WeeklyOff {
    /// Create a weekly-off pattern from any collection of weekdays.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        WeeklyOff {
            days: days.into_iter().collect(),
        }
    }

    /// A pattern with no off days at all.
    pub fn none() -> Self {
        WeeklyOff {
            days: BTreeSet::new(),
        }
    }

    /// Create a pattern from raw day indices (0 = Monday … 6 = Sunday).
    pub fn from_indices(indices: &[u8]) -> Result<Self> {
        let days = indices
            .iter()
            .map(|&value| Weekday::from_index(value))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(WeeklyOff { days })
    }

    /// Return `true` if `day` is a weekly off day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Iterate the off days in index order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().copied()
    }

    /// Number of off days per week.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Return `true` if no weekday is off.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
