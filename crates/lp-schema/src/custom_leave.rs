//! Custom leave types: named leave categories with balances, credit
//! schedules, and usage constraints.

use std::collections::BTreeSet;

use lp_core::ensure;
use lp_core::errors::{Error, Result};
use lp_core::Balance;
use lp_time::{Date, MonthDay, Weekday};

/// Limits on when a custom leave type may be used.
///
/// Organizations commonly bar certain leave types on particular weekdays
/// or on recurring dates, and cap how often the leave may be taken in
/// one cycle.  An empty constraint (the default) permits everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveConstraint {
    barred_weekdays: BTreeSet<Weekday>,
    barred_month_days: BTreeSet<MonthDay>,
    max_uses_per_cycle: Option<u32>,
}

impl LeaveConstraint {
    /// A constraint that bars nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Bar the leave on a weekday.
    pub fn bar_weekday(mut self, day: Weekday) -> Self {
        self.barred_weekdays.insert(day);
        self
    }

    /// Bar the leave on a recurring month/day.
    pub fn bar_month_day(mut self, month_day: MonthDay) -> Self {
        self.barred_month_days.insert(month_day);
        self
    }

    /// Cap how many times the leave may be taken per cycle.
    pub fn with_max_uses(mut self, uses: u32) -> Self {
        self.max_uses_per_cycle = Some(uses);
        self
    }

    /// Return `true` if the constraint permits this leave on `date`.
    pub fn allows(&self, date: Date) -> bool {
        if self.barred_weekdays.contains(&date.weekday()) {
            return false;
        }
        !self
            .barred_month_days
            .iter()
            .any(|md| md.month() == date.month() && md.day() == date.day_of_month())
    }

    /// Iterate the barred weekdays in index order.
    pub fn barred_weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.barred_weekdays.iter().copied()
    }

    /// Iterate the barred month/days in calendar order.
    pub fn barred_month_days(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.barred_month_days.iter().copied()
    }

    /// Return the per-cycle usage cap, if any.
    pub fn max_uses_per_cycle(&self) -> Option<u32> {
        self.max_uses_per_cycle
    }
}

/// A named leave category with a balance, an optional credit schedule,
/// and an optional usage constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomLeave {
    name: String,
    max_balance: Balance,
    credit_dates: Vec<MonthDay>,
    credit_balances: Vec<Balance>,
    expiry_dates: Vec<MonthDay>,
    carry_forward: Balance,
    constraint: LeaveConstraint,
}

impl CustomLeave {
    /// A leave type with no credit schedule, no carry-forward, and no
    /// constraint.
    pub fn new(name: impl Into<String>, max_balance: Balance) -> Self {
        CustomLeave {
            name: name.into(),
            max_balance,
            credit_dates: Vec::new(),
            credit_balances: Vec::new(),
            expiry_dates: Vec::new(),
            carry_forward: 0.0,
            constraint: LeaveConstraint::none(),
        }
    }

    /// Attach a credit schedule: on each month/day, the paired balance is
    /// credited.
    ///
    /// The two sequences must pair up one to one, and every balance must
    /// be non-negative.
    pub fn with_credit_schedule(
        mut self,
        dates: Vec<MonthDay>,
        balances: Vec<Balance>,
    ) -> Result<Self> {
        ensure!(
            dates.len() == balances.len(),
            Error::InconsistentScheduleLength {
                dates: dates.len(),
                balances: balances.len(),
            }
        );
        for &balance in &balances {
            ensure!(balance >= 0.0, Error::NegativeBalance { balance });
        }
        self.credit_dates = dates;
        self.credit_balances = balances;
        Ok(self)
    }

    /// Attach expiry month/days on which unused balance lapses.
    pub fn with_expiry_dates(mut self, dates: Vec<MonthDay>) -> Self {
        self.expiry_dates = dates;
        self
    }

    /// Set the balance carried over from the previous cycle.
    pub fn with_carry_forward(mut self, balance: Balance) -> Result<Self> {
        ensure!(balance >= 0.0, Error::NegativeBalance { balance });
        self.carry_forward = balance;
        Ok(self)
    }

    /// Attach a usage constraint.
    pub fn with_constraint(mut self, constraint: LeaveConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Return the leave name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The uppercase initials of each word in the name, so "Casual Leave"
    /// abbreviates to "CL".
    pub fn short_name(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Return the maximum holdable balance.
    pub fn max_balance(&self) -> Balance {
        self.max_balance
    }

    /// Return the credit month/days.
    pub fn credit_dates(&self) -> &[MonthDay] {
        &self.credit_dates
    }

    /// Return the balances credited on the corresponding credit dates.
    pub fn credit_balances(&self) -> &[Balance] {
        &self.credit_balances
    }

    /// Return the expiry month/days.
    pub fn expiry_dates(&self) -> &[MonthDay] {
        &self.expiry_dates
    }

    /// Return the balance carried over from the previous cycle.
    pub fn carry_forward(&self) -> Balance {
        self.carry_forward
    }

    /// Return the usage constraint.
    pub fn constraint(&self) -> &LeaveConstraint {
        &self.constraint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn month_day(m: u8, d: u8) -> MonthDay {
        MonthDay::new(m, d).unwrap()
    }

    #[test]
    fn test_short_name_is_the_initials() {
        assert_eq!(CustomLeave::new("Casual Leave", 12.0).short_name(), "CL");
        assert_eq!(CustomLeave::new("sick leave", 7.0).short_name(), "SL");
        assert_eq!(
            CustomLeave::new("Restricted Holiday Option", 2.0).short_name(),
            "RHO"
        );
    }

    #[test]
    fn test_credit_schedule_lengths_must_match() {
        let result = CustomLeave::new("Earned Leave", 30.0)
            .with_credit_schedule(vec![month_day(1, 1), month_day(7, 1)], vec![15.0]);
        assert_eq!(
            result,
            Err(Error::InconsistentScheduleLength {
                dates: 2,
                balances: 1,
            })
        );
    }

    #[test]
    fn test_balances_must_be_non_negative() {
        let result = CustomLeave::new("Earned Leave", 30.0)
            .with_credit_schedule(vec![month_day(1, 1)], vec![-1.5]);
        assert_eq!(result, Err(Error::NegativeBalance { balance: -1.5 }));
        assert_eq!(
            CustomLeave::new("Earned Leave", 30.0).with_carry_forward(-2.0),
            Err(Error::NegativeBalance { balance: -2.0 })
        );
    }

    #[test]
    fn test_valid_schedule() {
        let leave = CustomLeave::new("Earned Leave", 30.0)
            .with_credit_schedule(vec![month_day(1, 1), month_day(7, 1)], vec![15.0, 15.0])
            .unwrap()
            .with_carry_forward(4.5)
            .unwrap()
            .with_expiry_dates(vec![month_day(12, 31)]);
        assert_eq!(leave.name(), "Earned Leave");
        assert_eq!(leave.max_balance(), 30.0);
        assert_eq!(leave.credit_dates().len(), 2);
        assert_eq!(leave.credit_balances(), &[15.0, 15.0]);
        assert_eq!(leave.carry_forward(), 4.5);
        assert_eq!(leave.expiry_dates(), &[month_day(12, 31)]);
    }

    #[test]
    fn test_constraint_allows() {
        // 2025-01-03 is a Friday; 2025-01-06 a Monday.
        let constraint = LeaveConstraint::none()
            .bar_weekday(Weekday::Friday)
            .bar_month_day(month_day(1, 6))
            .with_max_uses(4);
        assert!(!constraint.allows(date(2025, 1, 3)));
        assert!(!constraint.allows(date(2025, 1, 6)));
        assert!(constraint.allows(date(2025, 1, 7)));
        assert_eq!(constraint.max_uses_per_cycle(), Some(4));

        // The constraint reads back intact through the leave that holds it.
        let leave = CustomLeave::new("Optional Holiday", 2.0).with_constraint(constraint);
        let barred_days: Vec<Weekday> = leave.constraint().barred_weekdays().collect();
        assert_eq!(barred_days, vec![Weekday::Friday]);
        let barred_dates: Vec<MonthDay> = leave.constraint().barred_month_days().collect();
        assert_eq!(barred_dates, vec![month_day(1, 6)]);
    }

    #[test]
    fn test_empty_constraint_allows_everything() {
        let constraint = LeaveConstraint::none();
        assert!(constraint.allows(date(2025, 2, 14)));
        assert_eq!(constraint.max_uses_per_cycle(), None);
    }
}
