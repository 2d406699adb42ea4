//! Integration tests for the `Date` serial arithmetic and the inclusive
//! date range iterator.

use proptest::prelude::*;

use lp_time::date::{days_in_month, is_leap_year};
use lp_time::{date_range, Date, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Serial walk ──────────────────────────────────────────────────────────────

#[test]
fn serial_walk_is_consistent() {
    // Walk a decade day by day and verify that fields, ordering, and the
    // weekday cycle all stay coherent with the serial numbers.
    let start = date(2020, 1, 1);
    let end = date(2030, 1, 1);

    let mut previous = start;
    let mut counter = start + 1;
    while counter <= end {
        assert_eq!(counter - previous, 1);
        assert_eq!(
            counter.weekday().index(),
            (previous.weekday().index() + 1) % 7,
            "weekday cycle broken at {counter}"
        );

        let day = counter.day_of_month();
        let month = counter.month();
        if day == 1 {
            let last = days_in_month(previous.year(), previous.month());
            assert_eq!(previous.day_of_month(), last, "month rollover at {counter}");
        } else {
            assert_eq!(month, previous.month());
            assert_eq!(day, previous.day_of_month() + 1);
        }

        previous = counter;
        counter = counter + 1;
    }
}

#[test]
fn leap_year_rule() {
    assert!(is_leap_year(2000)); // divisible by 400
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900)); // century, not divisible by 400
    assert!(!is_leap_year(2100));
    assert!(!is_leap_year(2025));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2025, 2), 28);
}

#[test]
fn known_weekdays() {
    // Spot checks against the civil calendar.
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(date(2025, 1, 1).weekday(), Weekday::Wednesday);
    assert_eq!(date(2025, 4, 1).weekday(), Weekday::Tuesday);
}

// ─── Ranges ───────────────────────────────────────────────────────────────────

#[test]
fn range_covers_a_fiscal_year() {
    let dates: Vec<Date> = date_range(date(2025, 4, 1), date(2026, 3, 31)).collect();
    assert_eq!(dates.len(), 365);
    assert_eq!(dates.first().copied(), Some(date(2025, 4, 1)));
    assert_eq!(dates.last().copied(), Some(date(2026, 3, 31)));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn serial_ymd_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let back = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
        prop_assert_eq!(d, back);
        prop_assert_eq!(back.serial(), serial);
    }

    #[test]
    fn ranges_are_gapless_and_ascending(start in 1i32..180_000, len in 0i32..2_000) {
        let first = Date::from_serial(start).unwrap();
        let last = Date::from_serial(start + len).unwrap();
        let dates: Vec<Date> = date_range(first, last).collect();
        prop_assert_eq!(dates.len() as i32, len + 1);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], 1);
        }
    }
}
