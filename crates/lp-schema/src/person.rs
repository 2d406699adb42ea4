//! `Person` — one roster entry: a name, a planning cycle, and the leave
//! configuration a planner reads.

use lp_time::Cycle;

use crate::custom_leave::CustomLeave;
use crate::holiday::Holiday;
use crate::weekly_off::WeeklyOff;

/// One person on a planning roster.
///
/// A person is built once per planning cycle and read-only afterwards;
/// when the configuration changes, rebuild the person rather than
/// mutating it.  The name doubles as the roster key, so it must be
/// unique within one planner.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    cycle: Cycle,
    weekly_off: WeeklyOff,
    holidays: Vec<Holiday>,
    required_leaves: Vec<Holiday>,
    custom_leaves: Vec<CustomLeave>,
}

impl Person {
    /// Begin building a person for the given planning cycle.
    ///
    /// The weekly-off pattern defaults to Saturday and Sunday; everything
    /// else starts empty.
    pub fn builder(name: impl Into<String>, cycle: Cycle) -> PersonBuilder {
        PersonBuilder {
            name: name.into(),
            cycle,
            weekly_off: WeeklyOff::default(),
            holidays: Vec::new(),
            required_leaves: Vec::new(),
            custom_leaves: Vec::new(),
        }
    }

    /// Return the person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the planning cycle.
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Return the weekly-off pattern.
    pub fn weekly_off(&self) -> &WeeklyOff {
        &self.weekly_off
    }

    /// Return the ad-hoc holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Return the dates where the person must take leave.  These are
    /// planner hints, not paid holidays, and never enter the paid set.
    pub fn required_leaves(&self) -> &[Holiday] {
        &self.required_leaves
    }

    /// Return the custom leave types.
    pub fn custom_leaves(&self) -> &[CustomLeave] {
        &self.custom_leaves
    }
}

/// Builder for [`Person`].
#[derive(Debug)]
pub struct PersonBuilder {
    name: String,
    cycle: Cycle,
    weekly_off: WeeklyOff,
    holidays: Vec<Holiday>,
    required_leaves: Vec<Holiday>,
    custom_leaves: Vec<CustomLeave>,
}

impl PersonBuilder {
    /// Replace the default Saturday/Sunday weekly-off pattern.
    pub fn with_weekly_off(mut self, weekly_off: WeeklyOff) -> Self {
        self.weekly_off = weekly_off;
        self
    }

    /// Assign one ad-hoc holiday.
    pub fn with_holiday(mut self, holiday: Holiday) -> Self {
        self.holidays.push(holiday);
        self
    }

    /// Assign many ad-hoc holidays at once.
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = Holiday>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Mark a date where the person must take leave.
    pub fn with_required_leave(mut self, leave: Holiday) -> Self {
        self.required_leaves.push(leave);
        self
    }

    /// Attach a custom leave type.
    pub fn with_custom_leave(mut self, leave: CustomLeave) -> Self {
        self.custom_leaves.push(leave);
        self
    }

    /// Finish building.
    pub fn build(self) -> Person {
        Person {
            name: self.name,
            cycle: self.cycle,
            weekly_off: self.weekly_off,
            holidays: self.holidays,
            required_leaves: self.required_leaves,
            custom_leaves: self.custom_leaves,
        }
    }
}
