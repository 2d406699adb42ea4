//! # leaveplan
//!
//! Paid-holiday aggregation and long-weekend planning over per-person
//! leave calendars.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! leaveplan = "0.1"
//! ```
//!
//! ```rust
//! use leaveplan::planner::{ClusterConfig, LeavePlanner};
//! use leaveplan::schema::{Holiday, Person};
//! use leaveplan::time::{Cycle, Date};
//!
//! fn main() -> leaveplan::core::Result<()> {
//!     // January 3, 2025 is a Friday; with the default Saturday/Sunday
//!     // weekly off it bridges into the weekend.
//!     let cycle = Cycle::calendar_year(2025);
//!     let asha = Person::builder("asha", cycle)
//!         .with_holiday(Holiday::named(Date::from_ymd(2025, 1, 3)?, "Founders Day"))
//!         .build();
//!
//!     let planner = LeavePlanner::new(cycle, vec![asha])?;
//!     let plan = planner.plan_roster(&ClusterConfig::default())?;
//!
//!     let outcome = plan.get("asha").expect("asha is on the roster");
//!     let long_weekends = outcome.as_ref().expect("planning succeeded").long_weekends();
//!     assert_eq!(long_weekends.groups()[0].len(), 3);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases and error definitions.
pub use lp_core as core;

/// Dates, weekdays, month/day pairs, planning cycles, and ranges.
pub use lp_time as time;

/// Leave and holiday schemas and the `Person` record.
pub use lp_schema as schema;

/// The planning core: aggregation, clustering, roster plans, reporting.
pub use lp_planner as planner;
