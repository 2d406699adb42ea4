//! `Holiday` — one ad-hoc paid holiday assigned to a person.

use lp_core::ensure;
use lp_core::errors::{Error, Result};
use lp_time::Date;

/// Highest holiday priority.
pub const MAX_PRIORITY: u8 = 5;

/// One ad-hoc paid holiday: a date, an optional display name, and a
/// priority from 0 (default) to [`MAX_PRIORITY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    date: Date,
    name: Option<String>,
    priority: u8,
}

impl Holiday {
    /// An unnamed holiday on `date` with priority 0.
    pub fn on(date: Date) -> Self {
        Holiday {
            date,
            name: None,
            priority: 0,
        }
    }

    /// A named holiday on `date` with priority 0.
    pub fn named(date: Date, name: impl Into<String>) -> Self {
        Holiday {
            date,
            name: Some(name.into()),
            priority: 0,
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: u8) -> Result<Self> {
        ensure!(
            priority <= MAX_PRIORITY,
            Error::PriorityOutOfRange { priority }
        );
        self.priority = priority;
        Ok(self)
    }

    /// Return the holiday date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Return the priority (0–5).
    pub fn priority(&self) -> u8 {
        self.priority
    }
}
