//! # lp-planner
//!
//! The planning core: per-person paid-holiday aggregation over a period,
//! long-weekend clustering, and roster-wide planning with per-person
//! result isolation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Long-weekend clustering and its configuration.
pub mod cluster;

/// `LeavePlanner` and per-person holiday aggregation.
pub mod planner;

/// Verbose reporting side channel.
pub mod report;

/// Roster-wide planning with per-person isolation.
pub mod roster;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cluster::{cluster_holidays, ClusterConfig, LongWeekends, Vacation};
pub use planner::{HolidaySummary, LeavePlanner, PaidHolidays};
pub use roster::{PersonPlan, RosterPlan};
