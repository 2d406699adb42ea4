//! Inclusive day-by-day iteration between two dates.

use crate::date::Date;

/// Iterate every date from `start` through `end`, both inclusive.
///
/// Yields nothing when `start > end`.
pub fn date_range(start: Date, end: Date) -> DateRange {
    DateRange {
        next: (start <= end).then_some(start),
        last: end,
    }
}

/// Iterator returned by [`date_range`].
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    last: Date,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = (current < self.last).then(|| current + 1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => (self.last - next + 1) as usize,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}
