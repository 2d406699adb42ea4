//! # lp-schema
//!
//! Leave and holiday schemas: weekly-off patterns, ad-hoc holidays,
//! custom leave types with constraints and balances, and the `Person`
//! record that aggregates them.
//!
//! Everything in this crate is validated data holding; the algorithmic
//! work lives in `lp-planner`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Custom leave types and their usage constraints.
pub mod custom_leave;

/// `Holiday` — one ad-hoc paid holiday.
pub mod holiday;

/// `Person` — one roster entry.
pub mod person;

/// `WeeklyOff` — recurring weekly off days.
pub mod weekly_off;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use custom_leave::{CustomLeave, LeaveConstraint};
pub use holiday::{Holiday, MAX_PRIORITY};
pub use person::{Person, PersonBuilder};
pub use weekly_off::WeeklyOff;
