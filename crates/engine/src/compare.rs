use std::collections::BTreeSet;

use crate::config::ScanMode;
use crate::model::{CompareOutcome, CompareSummary, Grouping, Mismatch};

/// Compare two groupings under a difference tolerance.
///
/// Walks the union of keys in sorted order. A key absent from one grouping
/// contributes an empty set, so "field present on one side only" adds the
/// full cardinality of the other side's set. The documents are equivalent
/// when the total symmetric-difference count stays within `tolerance`.
///
/// Under `ScanMode::ShortCircuit`, iteration stops as soon as the running
/// total strictly exceeds the tolerance; keys past that point are never
/// visited and produce no mismatch records.
pub fn compare(
    left: &Grouping,
    right: &Grouping,
    tolerance: usize,
    scan: ScanMode,
) -> CompareOutcome {
    let mut keys: BTreeSet<&str> = left.keys().map(String::as_str).collect();
    keys.extend(right.keys().map(String::as_str));
    let total_keys = keys.len();

    let empty = BTreeSet::new();
    let mut total_differences = 0;
    let mut keys_compared = 0;
    let mut truncated = false;
    let mut mismatches = Vec::new();

    for key in keys {
        keys_compared += 1;

        let left_values = left.get(key).unwrap_or(&empty);
        let right_values = right.get(key).unwrap_or(&empty);

        let difference = left_values.symmetric_difference(right_values).count();
        if difference > 0 {
            total_differences += difference;
            mismatches.push(Mismatch {
                key: key.to_string(),
                left: left_values.clone(),
                right: right_values.clone(),
            });
        }

        if scan == ScanMode::ShortCircuit && total_differences > tolerance {
            truncated = keys_compared < total_keys;
            break;
        }
    }

    CompareOutcome {
        summary: CompareSummary {
            equivalent: total_differences <= tolerance,
            total_differences,
            keys_compared,
            truncated,
        },
        mismatches,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn grouping(entries: &[(&str, &[&str])]) -> Grouping {
        entries
            .iter()
            .map(|(key, values)| {
                (
                    key.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn identical_groupings_are_equivalent_at_zero_tolerance() {
        let g = grouping(&[("id", &["1"]), ("name", &["bob"])]);
        let outcome = compare(&g, &g, 0, ScanMode::ShortCircuit);
        assert!(outcome.summary.equivalent);
        assert_eq!(outcome.summary.total_differences, 0);
        assert_eq!(outcome.summary.keys_compared, 2);
        assert!(outcome.mismatches.is_empty());
    }

    #[test]
    fn absent_key_counts_the_full_set() {
        let left = grouping(&[("tags", &["a", "b"])]);
        let right = Grouping::new();
        let outcome = compare(&left, &right, 3, ScanMode::Full);
        assert_eq!(outcome.summary.total_differences, 2);
        assert!(outcome.summary.equivalent);
        assert_eq!(outcome.mismatches.len(), 1);
        assert_eq!(outcome.mismatches[0].key, "tags");
        assert!(outcome.mismatches[0].right.is_empty());
    }

    #[test]
    fn comparison_is_symmetric() {
        let a = grouping(&[("id", &["1"]), ("extra", &["x"])]);
        let b = grouping(&[("id", &["2"])]);

        for tolerance in 0..4 {
            let ab = compare(&a, &b, tolerance, ScanMode::Full);
            let ba = compare(&b, &a, tolerance, ScanMode::Full);
            assert_eq!(ab.summary.equivalent, ba.summary.equivalent);
            assert_eq!(ab.summary.total_differences, ba.summary.total_differences);
        }
    }

    #[test]
    fn verdict_is_monotonic_in_tolerance() {
        let a = grouping(&[("k1", &["x"]), ("k2", &["y"]), ("k3", &["z"])]);
        let b = Grouping::new();

        // 3 total differences
        assert!(!compare(&a, &b, 2, ScanMode::Full).summary.equivalent);
        assert!(compare(&a, &b, 3, ScanMode::Full).summary.equivalent);
        assert!(compare(&a, &b, 10, ScanMode::Full).summary.equivalent);
    }

    #[test]
    fn total_equal_to_tolerance_is_still_equivalent() {
        let a = grouping(&[("k", &["x", "y"])]);
        let b = grouping(&[("k", &["x"])]);
        let outcome = compare(&a, &b, 1, ScanMode::ShortCircuit);
        assert_eq!(outcome.summary.total_differences, 1);
        assert!(outcome.summary.equivalent);
    }

    #[test]
    fn short_circuit_stops_before_the_end() {
        let a = grouping(&[
            ("k1", &["a"]),
            ("k2", &["b"]),
            ("k3", &["c"]),
            ("k4", &["d"]),
            ("k5", &["e"]),
        ]);
        let b = Grouping::new();

        let outcome = compare(&a, &b, 0, ScanMode::ShortCircuit);
        assert!(!outcome.summary.equivalent);
        assert!(outcome.summary.truncated);
        assert_eq!(outcome.summary.keys_compared, 1);
        assert_eq!(outcome.mismatches.len(), 1);
        // total undercounts the true total of 5
        assert_eq!(outcome.summary.total_differences, 1);
    }

    #[test]
    fn full_scan_reports_the_true_total() {
        let a = grouping(&[
            ("k1", &["a"]),
            ("k2", &["b"]),
            ("k3", &["c"]),
            ("k4", &["d"]),
            ("k5", &["e"]),
        ]);
        let b = Grouping::new();

        let outcome = compare(&a, &b, 0, ScanMode::Full);
        assert!(!outcome.summary.equivalent);
        assert!(!outcome.summary.truncated);
        assert_eq!(outcome.summary.keys_compared, 5);
        assert_eq!(outcome.summary.total_differences, 5);
        assert_eq!(outcome.mismatches.len(), 5);
    }

    #[test]
    fn exceeding_on_the_last_key_is_not_truncated() {
        let a = grouping(&[("k1", &["a"]), ("k2", &["b"])]);
        let b = Grouping::new();

        let outcome = compare(&a, &b, 1, ScanMode::ShortCircuit);
        assert!(!outcome.summary.equivalent);
        assert!(!outcome.summary.truncated);
        assert_eq!(outcome.summary.keys_compared, 2);
    }

    #[test]
    fn both_groupings_empty_are_equivalent() {
        let outcome = compare(&Grouping::new(), &Grouping::new(), 0, ScanMode::ShortCircuit);
        assert!(outcome.summary.equivalent);
        assert_eq!(outcome.summary.keys_compared, 0);
    }
}
