use crate::models::PeptideRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Default RT window for slicing, minutes. Matches the length of the
/// gradients these exports come from.
pub const DEFAULT_RT_MIN: f64 = 0.0;
pub const DEFAULT_RT_MAX: f64 = 90.0;

/// Keep rows whose RT falls in `[rt_min, rt_max)`.
///
/// Rows with a missing RT never qualify.
pub fn slice_rt_range(
    records: &[PeptideRecord],
    rt_min: f64,
    rt_max: f64,
) -> Vec<PeptideRecord> {
    records
        .iter()
        .filter(|record| {
            record
                .rt
                .is_some_and(|rt| rt >= rt_min && rt < rt_max)
        })
        .cloned()
        .collect()
}

/// Outer-join partition of the distinct peptides of two tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeptideOverlap {
    pub common: Vec<String>,
    pub left_only: Vec<String>,
    pub right_only: Vec<String>,
}

/// Partition the distinct peptide values of two tables into the ones
/// present in both, only in `left`, and only in `right`, each in
/// first-appearance order.
pub fn compare_peptide_sets(
    left: &[PeptideRecord],
    right: &[PeptideRecord],
) -> PeptideOverlap {
    let right_set: HashSet<&str> = right.iter().map(|r| r.peptide.as_str()).collect();

    let mut overlap = PeptideOverlap::default();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in left {
        if !seen.insert(record.peptide.as_str()) {
            continue;
        }
        if right_set.contains(record.peptide.as_str()) {
            overlap.common.push(record.peptide.clone());
        } else {
            overlap.left_only.push(record.peptide.clone());
        }
    }
    // Whatever was never seen on the left is right-only.
    for record in right {
        if seen.insert(record.peptide.as_str()) {
            overlap.right_only.push(record.peptide.clone());
        }
    }
    overlap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(peptide: &str, rt: Option<f64>) -> PeptideRecord {
        PeptideRecord {
            peptide: peptide.to_string(),
            z: 2,
            rt,
            ook0_range: "0.8-1.0".to_string(),
            precursor_id: String::new(),
            mz: String::new(),
            mass: String::new(),
            scan: String::new(),
            accession: String::new(),
        }
    }

    #[test]
    fn test_slice_rt_range_half_open() {
        let records = vec![
            record("A", Some(0.0)),
            record("B", Some(45.0)),
            record("C", Some(90.0)),
            record("D", Some(91.0)),
        ];
        let kept = slice_rt_range(&records, DEFAULT_RT_MIN, DEFAULT_RT_MAX);
        let peptides: Vec<&str> = kept.iter().map(|r| r.peptide.as_str()).collect();
        assert_eq!(peptides, vec!["A", "B"]);
    }

    #[test]
    fn test_slice_rt_range_drops_missing() {
        let records = vec![record("A", Some(10.0)), record("B", None)];
        let kept = slice_rt_range(&records, 0.0, 90.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].peptide, "A");
    }

    #[test]
    fn test_compare_peptide_sets() {
        let left = vec![
            record("AAGK", Some(1.0)),
            record("BBCK", Some(2.0)),
            record("AAGK", Some(3.0)),
            record("CCDK", Some(4.0)),
        ];
        let right = vec![
            record("BBCK", Some(1.0)),
            record("DDEK", Some(2.0)),
            record("BBCK", Some(3.0)),
        ];

        let overlap = compare_peptide_sets(&left, &right);
        assert_eq!(overlap.common, vec!["BBCK"]);
        assert_eq!(overlap.left_only, vec!["AAGK", "CCDK"]);
        assert_eq!(overlap.right_only, vec!["DDEK"]);
    }

    #[test]
    fn test_compare_peptide_sets_empty_sides() {
        let rows = vec![record("AAGK", Some(1.0))];
        let overlap = compare_peptide_sets(&rows, &[]);
        assert_eq!(overlap.left_only, vec!["AAGK"]);
        assert!(overlap.common.is_empty());
        assert!(overlap.right_only.is_empty());
    }
}
