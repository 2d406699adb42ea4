//! `LeavePlanner` — per-person holiday aggregation over one planning
//! period.

use lp_core::ensure;
use lp_core::errors::{Error, Result};
use lp_schema::Person;
use lp_time::{date_range, Cycle, Date};

use crate::cluster::{self, ClusterConfig, LongWeekends};

/// Plans holidays for a roster of persons over one period.
///
/// The period boundaries are resolved and checked once, at construction,
/// so every later query may assume `end > start`.  The roster is taken
/// by value as an immutable snapshot: changes to the caller's copies
/// never reach a constructed planner.
///
/// All queries are pure functions of the snapshot, recomputed per call.
#[derive(Debug, Clone)]
pub struct LeavePlanner {
    start: Date,
    end: Date,
    persons: Vec<Person>,
}

impl LeavePlanner {
    /// Create a planner over `period` for the given roster.
    ///
    /// Fails when a period boundary does not resolve to a real date,
    /// when the period does not end strictly after it starts, or when
    /// two persons share a name.
    pub fn new(period: Cycle, persons: Vec<Person>) -> Result<Self> {
        let start = period.start()?;
        let end = period.end()?;
        ensure!(
            end > start,
            Error::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            }
        );
        for (i, person) in persons.iter().enumerate() {
            if persons[..i].iter().any(|other| other.name() == person.name()) {
                return Err(Error::DuplicatePersonName {
                    name: person.name().to_string(),
                });
            }
        }
        Ok(LeavePlanner {
            start,
            end,
            persons,
        })
    }

    /// Return the period start.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Return the period end.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Return the roster snapshot.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Return `end - start` in days (one less than the calendar length).
    pub fn plan_duration(&self) -> i32 {
        self.end - self.start
    }

    /// Every date of the period, both endpoints included, ascending.
    pub fn calendar(&self) -> Vec<Date> {
        date_range(self.start, self.end).collect()
    }

    /// Aggregate the paid holidays of one person over the period.
    ///
    /// Ad-hoc holiday dates are taken as assigned; keeping them inside
    /// the period is the caller's responsibility.
    pub fn paid_holidays(&self, person: &Person) -> PaidHolidays {
        let weekly_off_dates: Vec<Date> = date_range(self.start, self.end)
            .filter(|date| person.weekly_off().contains(date.weekday()))
            .collect();
        let additional_dates: Vec<Date> =
            person.holidays().iter().map(|holiday| holiday.date()).collect();

        let mut unique_sorted: Vec<Date> = weekly_off_dates
            .iter()
            .chain(&additional_dates)
            .copied()
            .collect();
        unique_sorted.sort_unstable();
        unique_sorted.dedup();

        PaidHolidays {
            weekly_off_dates,
            additional_dates,
            unique_sorted,
        }
    }

    /// Summarize how much of the period is a paid holiday for `person`.
    pub fn holiday_summary(&self, person: &Person) -> HolidaySummary {
        let total = self.paid_holidays(person).count();
        let ratio = round5(total as f64 / self.plan_duration() as f64);
        HolidaySummary { total, ratio }
    }

    /// Cluster one person's paid holidays into long weekends.
    pub fn long_weekends(
        &self,
        person: &Person,
        config: &ClusterConfig,
    ) -> Result<LongWeekends> {
        let paid = self.paid_holidays(person);
        cluster::cluster_holidays(person.name(), paid.unique_sorted(), config)
    }
}

/// The paid holidays of one person over a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidHolidays {
    weekly_off_dates: Vec<Date>,
    additional_dates: Vec<Date>,
    unique_sorted: Vec<Date>,
}

impl PaidHolidays {
    /// Dates of the period falling on the person's weekly off days.
    pub fn weekly_off_dates(&self) -> &[Date] {
        &self.weekly_off_dates
    }

    /// The person's ad-hoc holiday dates, in assignment order.
    pub fn additional_dates(&self) -> &[Date] {
        &self.additional_dates
    }

    /// Ascending union of the two, duplicates removed.
    pub fn unique_sorted(&self) -> &[Date] {
        &self.unique_sorted
    }

    /// Number of distinct paid holiday dates.
    pub fn count(&self) -> usize {
        self.unique_sorted.len()
    }
}

/// Holiday count and period fraction for one person.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HolidaySummary {
    total: usize,
    ratio: f64,
}

impl HolidaySummary {
    /// Number of distinct paid holiday dates.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of the plan duration that is a paid holiday, rounded to
    /// five decimal places.
    ///
    /// The divisor is [`LeavePlanner::plan_duration`] (`end - start`), one
    /// less than the inclusive calendar length, so a person with every
    /// single day off reports `(n + 1) / n`, slightly above 1.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

fn round5(x: f64) -> f64 {
    (x * 100_000.0).round() / 100_000.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
