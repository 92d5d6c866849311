//! Roster Queries
//!
//! Both queries are single linear scans with no side effects beyond a
//! debug trace. "No match" is `None` or an empty `Vec`, never a sentinel.

use tracing::debug;
#[cfg(feature = "debug-tracing")]
use tracing::trace;

use crate::roster::record::{PlayerId, PlayerRecord};

/// Lowest run total among records whose player type equals `player_type`.
///
/// Returns `None` when no record matches. Zero and negative run totals are
/// valid minima.
pub fn lowest_runs(records: &[PlayerRecord], player_type: &str) -> Option<i32> {
    let mut lowest: Option<i32> = None;
    let mut matched = 0usize;

    for record in records.iter().filter(|r| r.is_player_type(player_type)) {
        #[cfg(feature = "debug-tracing")]
        trace!(id = %record.id, runs = record.runs, "lowest_runs candidate");

        matched += 1;
        lowest = Some(match lowest {
            Some(current) => current.min(record.runs),
            None => record.runs,
        });
    }

    debug!(player_type, matched, ?lowest, "lowest_runs");
    lowest
}

/// Identifiers of records whose match type equals `match_type`, ascending.
///
/// Duplicate identifiers are kept. The result is empty when nothing matches.
pub fn find_by_match_type(records: &[PlayerRecord], match_type: &str) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = records
        .iter()
        .filter(|r| r.is_match_type(match_type))
        .map(|r| r.id)
        .collect();
    ids.sort_unstable();

    debug!(match_type, matched = ids.len(), "find_by_match_type");
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
    use std::collections::BTreeMap;

    fn reference_roster() -> Vec<PlayerRecord> {
        vec![
            PlayerRecord::new(1, "A", 50, "bat", "T20"),
            PlayerRecord::new(2, "B", 30, "bat", "ODI"),
            PlayerRecord::new(3, "C", 70, "bowl", "T20"),
            PlayerRecord::new(4, "D", 10, "bat", "T20"),
        ]
    }

    fn ids(raw: &[i32]) -> Vec<PlayerId> {
        raw.iter().copied().map(PlayerId::new).collect()
    }

    #[test]
    fn test_reference_scenario() {
        let roster = reference_roster();

        assert_eq!(lowest_runs(&roster, "bat"), Some(10));
        assert_eq!(lowest_runs(&roster, "bowl"), Some(70));
        assert_eq!(lowest_runs(&roster, "allrounder"), None);

        assert_eq!(find_by_match_type(&roster, "T20"), ids(&[1, 3, 4]));
        assert_eq!(find_by_match_type(&roster, "ODI"), ids(&[2]));
        assert!(find_by_match_type(&roster, "Test").is_empty());
    }

    #[test]
    fn test_lowest_runs_is_true_minimum() {
        // Smallest value sits in the middle; the last match is not the minimum.
        let roster = vec![
            PlayerRecord::new(1, "A", 40, "bat", "T20"),
            PlayerRecord::new(2, "B", 5, "bat", "T20"),
            PlayerRecord::new(3, "C", 25, "bat", "T20"),
        ];

        assert_eq!(lowest_runs(&roster, "bat"), Some(5));
    }

    #[test]
    fn test_lowest_runs_zero_and_negative() {
        let roster = vec![
            PlayerRecord::new(1, "A", 0, "bat", "T20"),
            PlayerRecord::new(2, "B", 12, "bat", "T20"),
        ];
        assert_eq!(lowest_runs(&roster, "bat"), Some(0));

        let roster = vec![
            PlayerRecord::new(1, "A", -4, "bowl", "T20"),
            PlayerRecord::new(2, "B", 3, "bowl", "T20"),
        ];
        assert_eq!(lowest_runs(&roster, "bowl"), Some(-4));
        assert_eq!(lowest_runs(&roster, "bat"), None);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let roster = reference_roster();

        assert_eq!(lowest_runs(&roster, "BAT"), None);
        assert!(find_by_match_type(&roster, "t20").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lowest_runs(&[], "bat"), None);
        assert!(find_by_match_type(&[], "T20").is_empty());
    }

    #[test]
    fn test_ids_sorted_regardless_of_order() {
        let roster = vec![
            PlayerRecord::new(42, "A", 1, "bat", "T20"),
            PlayerRecord::new(-7, "B", 1, "bat", "T20"),
            PlayerRecord::new(13, "C", 1, "bat", "ODI"),
            PlayerRecord::new(3, "D", 1, "bat", "T20"),
        ];

        assert_eq!(find_by_match_type(&roster, "T20"), ids(&[-7, 3, 42]));
    }

    #[test]
    fn test_results_independent_of_shuffle() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut roster: Vec<PlayerRecord> = (0..32)
            .map(|i| {
                let player_type = if i % 3 == 0 { "bowl" } else { "bat" };
                let match_type = if i % 2 == 0 { "T20" } else { "ODI" };
                PlayerRecord::new(i, format!("P{i}"), (i * 37) % 101 - 20, player_type, match_type)
            })
            .collect();

        let expected_low = lowest_runs(&roster, "bat");
        let expected_ids = find_by_match_type(&roster, "T20");

        for _ in 0..10 {
            roster.shuffle(&mut rng);
            assert_eq!(lowest_runs(&roster, "bat"), expected_low);
            assert_eq!(find_by_match_type(&roster, "T20"), expected_ids);
        }
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    const PLAYER_TYPES: [&str; 3] = ["bat", "bowl", "keeper"];
    const MATCH_TYPES: [&str; 3] = ["T20", "ODI", "Test"];

    fn arb_record() -> impl Strategy<Value = PlayerRecord> {
        (
            -50i32..50,
            -200i32..200,
            prop::sample::select(PLAYER_TYPES.to_vec()),
            prop::sample::select(MATCH_TYPES.to_vec()),
        )
            .prop_map(|(id, runs, player_type, match_type)| {
                PlayerRecord::new(id, format!("P{id}"), runs, player_type, match_type)
            })
    }

    fn arb_records() -> impl Strategy<Value = Vec<PlayerRecord>> {
        prop::collection::vec(arb_record(), 0..16)
    }

    fn arb_target() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(PLAYER_TYPES.to_vec()).prop_map(str::to_string),
            prop::sample::select(MATCH_TYPES.to_vec()).prop_map(str::to_string),
            Just("allrounder".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn lowest_runs_matches_brute_force(records in arb_records(), target in arb_target()) {
            let matching: Vec<i32> = records
                .iter()
                .filter(|r| r.player_type == target)
                .map(|r| r.runs)
                .collect();

            let result = lowest_runs(&records, &target);
            if matching.is_empty() {
                prop_assert_eq!(result, None);
            } else {
                let mut brute = matching[0];
                for runs in &matching[1..] {
                    if *runs < brute {
                        brute = *runs;
                    }
                }
                prop_assert_eq!(result, Some(brute));
            }
        }

        #[test]
        fn find_by_match_type_sorted_and_exact(records in arb_records(), target in arb_target()) {
            let result = find_by_match_type(&records, &target);

            prop_assert!(result.windows(2).all(|w| w[0] <= w[1]));

            let mut expected: BTreeMap<PlayerId, usize> = BTreeMap::new();
            for record in records.iter().filter(|r| r.match_type == target) {
                *expected.entry(record.id).or_default() += 1;
            }
            let mut actual: BTreeMap<PlayerId, usize> = BTreeMap::new();
            for id in &result {
                *actual.entry(*id).or_default() += 1;
            }
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn queries_are_idempotent(records in arb_records(), target in arb_target()) {
            prop_assert_eq!(lowest_runs(&records, &target), lowest_runs(&records, &target));
            prop_assert_eq!(
                find_by_match_type(&records, &target),
                find_by_match_type(&records, &target)
            );
        }

        #[test]
        fn queries_ignore_record_order(
            records in arb_records().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
            target in arb_target(),
        ) {
            let (original, shuffled) = records;
            prop_assert_eq!(lowest_runs(&original, &target), lowest_runs(&shuffled, &target));
            prop_assert_eq!(
                find_by_match_type(&original, &target),
                find_by_match_type(&shuffled, &target)
            );
        }
    }
}
