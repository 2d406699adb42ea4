//! Roster-wide planning with per-person result isolation.

use indexmap::IndexMap;

use lp_core::errors::Result;

use crate::cluster::{ClusterConfig, LongWeekends};
use crate::planner::{HolidaySummary, LeavePlanner, PaidHolidays};

/// Everything a planner derives for one person.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonPlan {
    paid: PaidHolidays,
    summary: HolidaySummary,
    long_weekends: LongWeekends,
}

impl PersonPlan {
    /// The aggregated paid holidays.
    pub fn paid(&self) -> &PaidHolidays {
        &self.paid
    }

    /// The holiday count and ratio summary.
    pub fn summary(&self) -> HolidaySummary {
        self.summary
    }

    /// The long-weekend clusters.
    pub fn long_weekends(&self) -> &LongWeekends {
        &self.long_weekends
    }
}

/// Per-person outcomes for a whole roster, in roster order.
///
/// One person's failure (an empty holiday set, say) is confined to that
/// person's entry and never disturbs the others.
#[derive(Debug, Clone)]
pub struct RosterPlan {
    entries: IndexMap<String, Result<PersonPlan>>,
}

impl RosterPlan {
    /// Iterate the entries in roster order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Result<PersonPlan>)> {
        self.entries
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// Look up one person's outcome.
    pub fn get(&self, name: &str) -> Option<&Result<PersonPlan>> {
        self.entries.get(name)
    }

    /// Number of persons planned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the roster was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LeavePlanner {
    /// Plan the whole roster.
    ///
    /// The configuration is checked once up front and a bad one fails the
    /// call; after that, each person's outcome is computed and recorded
    /// independently.
    pub fn plan_roster(&self, config: &ClusterConfig) -> Result<RosterPlan> {
        config.validate()?;
        let mut entries = IndexMap::with_capacity(self.persons().len());
        for person in self.persons() {
            let outcome = self
                .long_weekends(person, config)
                .map(|long_weekends| PersonPlan {
                    paid: self.paid_holidays(person),
                    summary: self.holiday_summary(person),
                    long_weekends,
                });
            entries.insert(person.name().to_string(), outcome);
        }
        Ok(RosterPlan { entries })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
