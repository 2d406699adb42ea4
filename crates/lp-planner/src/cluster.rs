//! Long-weekend clustering over a sorted holiday-date set.
//!
//! Dates are already linear day serials, so the gap between two holidays
//! is a plain subtraction.  The walk keeps one open group and closes it
//! whenever the next holiday is further away than the tolerance allows;
//! groups that meet the minimum size are then reported as labeled
//! vacations.

use indexmap::IndexMap;

use lp_core::ensure;
use lp_core::errors::{Error, Result};
use lp_time::{date_range, Date};

/// Tuning for the long-weekend clustering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    tolerance_days: u32,
    min_cluster_size: usize,
    include_date_lists: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            tolerance_days: 0,
            min_cluster_size: 2,
            include_date_lists: false,
        }
    }
}

impl ClusterConfig {
    /// The default configuration: tolerance 0, minimum cluster size 2,
    /// no per-vacation date lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Longest run of working days between two holidays that still lets
    /// them merge into one cluster.  Zero merges adjacent dates only.
    pub fn with_tolerance(mut self, days: u32) -> Self {
        self.tolerance_days = days;
        self
    }

    /// Smallest group reported as a vacation.  Must be at least 1.
    pub fn with_min_cluster_size(mut self, size: usize) -> Self {
        self.min_cluster_size = size;
        self
    }

    /// Also materialize each vacation's full inclusive date list.
    pub fn with_date_lists(mut self, include: bool) -> Self {
        self.include_date_lists = include;
        self
    }

    /// Return the merge tolerance in days.
    pub fn tolerance_days(&self) -> u32 {
        self.tolerance_days
    }

    /// Return the smallest group size reported as a vacation.
    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }

    /// Return whether vacations carry their full date lists.
    pub fn include_date_lists(&self) -> bool {
        self.include_date_lists
    }

    /// Check the configuration before use.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_cluster_size >= 1,
            Error::InvalidClusterSize {
                size: self.min_cluster_size
            }
        );
        Ok(())
    }
}

/// One reported long weekend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacation {
    start: Date,
    end: Date,
    duration_days: i32,
    dates: Option<Vec<Date>>,
}

impl Vacation {
    /// First date of the stretch.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the stretch.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Inclusive length of the stretch in days.
    pub fn duration_days(&self) -> i32 {
        self.duration_days
    }

    /// The full inclusive date list, when requested via
    /// [`ClusterConfig::with_date_lists`].
    pub fn dates(&self) -> Option<&[Date]> {
        self.dates.as_deref()
    }
}

/// Clustering result for one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongWeekends {
    groups: Vec<Vec<Date>>,
    vacations: IndexMap<String, Vacation>,
}

impl LongWeekends {
    /// Every cluster found, chronological, including those below the
    /// vacation threshold.
    pub fn groups(&self) -> &[Vec<Date>] {
        &self.groups
    }

    /// Labeled vacations (`"VACATION #001"`, …) in chronological order.
    pub fn vacations(&self) -> &IndexMap<String, Vacation> {
        &self.vacations
    }
}

/// Cluster `dates` into long-weekend groups.
///
/// `dates` must be ascending and de-duplicated, the shape produced by
/// paid-holiday aggregation.  `person` labels the error when the set is
/// empty.
pub fn cluster_holidays(
    person: &str,
    dates: &[Date],
    config: &ClusterConfig,
) -> Result<LongWeekends> {
    config.validate()?;
    ensure!(
        !dates.is_empty(),
        Error::EmptyHolidaySet {
            person: person.to_string(),
        }
    );

    // Two consecutive holidays merge when the working days between them
    // fit the tolerance, i.e. their serials differ by tolerance + 1 or
    // less.  i64 keeps the comparison exact for any u32 tolerance.
    let merge_within = i64::from(config.tolerance_days()) + 1;
    let mut groups: Vec<Vec<Date>> = Vec::new();
    let mut open = vec![dates[0]];
    for window in dates.windows(2) {
        let (cur, nxt) = (window[0], window[1]);
        if i64::from(nxt - cur) <= merge_within {
            open.push(nxt);
        } else {
            groups.push(std::mem::replace(&mut open, vec![nxt]));
        }
    }
    groups.push(open);

    let mut vacations = IndexMap::new();
    for group in groups.iter().filter(|g| g.len() >= config.min_cluster_size()) {
        let (start, end) = (group[0], group[group.len() - 1]);
        let label = format!("VACATION #{:03}", vacations.len() + 1);
        let date_list = config
            .include_date_lists()
            .then(|| date_range(start, end).collect());
        vacations.insert(
            label,
            Vacation {
                start,
                end,
                duration_days: end - start + 1,
                dates: date_list,
            },
        );
    }

    Ok(LongWeekends { groups, vacations })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
