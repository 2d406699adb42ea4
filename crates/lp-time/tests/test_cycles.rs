//! Integration tests for planning cycles and their boundary resolution.

use lp_time::{Cycle, MonthDay};

fn month_day(m: u8, d: u8) -> MonthDay {
    MonthDay::new(m, d).unwrap()
}

// ─── Boundary resolution ──────────────────────────────────────────────────────

#[test]
fn fiscal_cycles_roll_into_the_next_year() {
    for year in [2023, 2024, 2025, 2026] {
        let cycle = Cycle::new(year, month_day(4, 1), month_day(3, 31));
        let start = cycle.start().unwrap();
        let end = cycle.end().unwrap();
        assert_eq!(start.year(), year);
        assert_eq!(end.year(), year + 1);
        // The span always covers exactly one Feb, in the rolled-over year.
        let expected = if lp_time::date::is_leap_year(year + 1) {
            365
        } else {
            364
        };
        assert_eq!(cycle.duration_days().unwrap(), expected);
    }
}

#[test]
fn calendar_year_durations() {
    assert_eq!(Cycle::calendar_year(2025).duration_days().unwrap(), 364);
    assert_eq!(Cycle::calendar_year(2024).duration_days().unwrap(), 365);
}

#[test]
fn start_month_after_end_month_is_the_rollover_trigger() {
    // Start in July, end in June: end lands in the next year.
    let cycle = Cycle::new(2025, month_day(7, 1), month_day(6, 30));
    assert_eq!(cycle.end().unwrap().year(), 2026);

    // Start and end in the same month: no rollover, whatever the days say.
    let cycle = Cycle::new(2025, month_day(7, 20), month_day(7, 5));
    assert_eq!(cycle.end().unwrap().year(), 2025);
    assert!(cycle.duration_days().unwrap() < 0);
}

// ─── Deferred validation ──────────────────────────────────────────────────────

#[test]
fn boundaries_validate_fields_only_at_construction() {
    // Feb 30 constructs fine and fails once a year is attached.
    let cycle = Cycle::new(2025, month_day(1, 1), month_day(2, 30));
    assert!(cycle.start().is_ok());
    assert!(cycle.end().is_err());
    assert!(cycle.duration_days().is_err());
}
