//! Verbose reporting side channel.
//!
//! Planning itself is pure; narration goes through the `log` facade so
//! the host application decides where, or whether, it lands.

use crate::roster::RosterPlan;

/// Emit one `info` line per planned person and one `warn` line per
/// failed entry.
pub fn log_roster(plan: &RosterPlan) {
    for (name, outcome) in plan.entries() {
        match outcome {
            Ok(person_plan) => log::info!(
                "{name}: {} paid holidays ({:.5} of the period), {} groups, {} qualify as vacations",
                person_plan.paid().count(),
                person_plan.summary().ratio(),
                person_plan.long_weekends().groups().len(),
                person_plan.long_weekends().vacations().len(),
            ),
            Err(error) => log::warn!("{name}: planning failed: {error}"),
        }
    }
}
