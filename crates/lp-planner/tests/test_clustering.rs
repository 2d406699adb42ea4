//! Integration tests for the long-weekend clustering walk.

use proptest::collection::btree_set;
use proptest::prelude::*;

use lp_planner::{cluster_holidays, ClusterConfig};
use lp_time::Date;

fn dates_from_serials(serials: &[i32]) -> Vec<Date> {
    serials
        .iter()
        .map(|&s| Date::from_serial(s).unwrap())
        .collect()
}

// ─── Fixed grids ──────────────────────────────────────────────────────────────

#[test]
fn tolerance_zero_and_one_split_the_reference_sequence() {
    let dates = dates_from_serials(&[1, 2, 3, 5, 6, 9, 10]);

    let tight = cluster_holidays("grid", &dates, &ClusterConfig::default()).unwrap();
    let tight_groups: Vec<Vec<i32>> = tight
        .groups()
        .iter()
        .map(|g| g.iter().map(Date::serial).collect())
        .collect();
    assert_eq!(tight_groups, vec![vec![1, 2, 3], vec![5, 6], vec![9, 10]]);

    let loose =
        cluster_holidays("grid", &dates, &ClusterConfig::new().with_tolerance(1)).unwrap();
    let loose_groups: Vec<Vec<i32>> = loose
        .groups()
        .iter()
        .map(|g| g.iter().map(Date::serial).collect())
        .collect();
    assert_eq!(loose_groups, vec![vec![1, 2, 3, 5, 6], vec![9, 10]]);
}

#[test]
fn widening_tolerance_never_increases_the_group_count() {
    let dates = dates_from_serials(&[10, 11, 14, 15, 20, 26, 27, 33]);
    let mut previous = usize::MAX;
    for tolerance in 0..8 {
        let config = ClusterConfig::new().with_tolerance(tolerance);
        let result = cluster_holidays("grid", &dates, &config).unwrap();
        assert!(result.groups().len() <= previous);
        previous = result.groups().len();
    }
    // Wide enough, and everything is one stretch.
    let config = ClusterConfig::new().with_tolerance(7);
    let result = cluster_holidays("grid", &dates, &config).unwrap();
    assert_eq!(result.groups().len(), 1);
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn arb_config() -> impl Strategy<Value = ClusterConfig> {
    (0u32..4, 1usize..4, any::<bool>()).prop_map(|(tolerance, min_size, lists)| {
        ClusterConfig::new()
            .with_tolerance(tolerance)
            .with_min_cluster_size(min_size)
            .with_date_lists(lists)
    })
}

proptest! {
    #[test]
    fn groups_partition_the_input(
        serials in btree_set(1i32..5_000, 1..150),
        config in arb_config(),
    ) {
        let dates: Vec<Date> = serials
            .iter()
            .map(|&s| Date::from_serial(s).unwrap())
            .collect();
        let result = cluster_holidays("prop", &dates, &config).unwrap();

        // Flattening the groups gives back the input, order preserved.
        let flattened: Vec<Date> = result.groups().iter().flatten().copied().collect();
        prop_assert_eq!(flattened, dates);

        // Within a group every gap fits the tolerance; across a group
        // boundary it never does.
        let merge_within = config.tolerance_days() as i32 + 1;
        for group in result.groups() {
            prop_assert!(!group.is_empty());
            for pair in group.windows(2) {
                prop_assert!(pair[1] - pair[0] <= merge_within);
            }
        }
        for pair in result.groups().windows(2) {
            let last_of_left = pair[0][pair[0].len() - 1];
            let first_of_right = pair[1][0];
            prop_assert!(first_of_right - last_of_left > merge_within);
        }

        // Exactly the qualifying groups become vacations, labeled
        // consecutively from #001.
        let qualifying = result
            .groups()
            .iter()
            .filter(|g| g.len() >= config.min_cluster_size())
            .count();
        prop_assert_eq!(result.vacations().len(), qualifying);
        for (i, (label, vacation)) in result.vacations().iter().enumerate() {
            prop_assert_eq!(label, &format!("VACATION #{:03}", i + 1));
            prop_assert_eq!(
                vacation.duration_days(),
                vacation.end() - vacation.start() + 1
            );
            if config.include_date_lists() {
                let listed = vacation.dates().unwrap();
                prop_assert_eq!(listed.len() as i32, vacation.duration_days());
            } else {
                prop_assert!(vacation.dates().is_none());
            }
        }
    }
}
