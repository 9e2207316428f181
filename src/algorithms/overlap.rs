//! Overlap coefficient over partitions.
//!
//! Ratio of pairs connected in both partitions to the smaller side's
//! connected-pair count. A side with no connected pairs makes the
//! denominator zero; the NaN is returned as-is.

use crate::algorithms::pairs::pair_counts;
use crate::data::{Dataset, Partition};
use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;

/// Overlap coefficient of two partitions. Commutative.
pub fn overlap<T>(a: &Partition<T>, b: &Partition<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    let counts = pair_counts(a, b)?;
    let smaller = counts.connected_a().min(counts.connected_b());
    Ok(counts.both as f64 / smaller as f64)
}

/// Dispatch over two parsed datasets; applicable to partition pairs only.
pub fn overlap_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a, b) {
        (Dataset::Partition(pa), Dataset::Partition(pb)) => overlap(pa, pb).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition(groups: &[&[&str]]) -> Partition<String> {
        Partition::from_groups(
            groups
                .iter()
                .map(|g| g.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_self_comparison() {
        let p = partition(&[&["a", "b"], &["c", "d"]]);
        assert!((overlap(&p, &p).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_refinement_is_full_overlap() {
        // Every pair connected in the finer partition is connected in the
        // coarser one.
        let coarse = partition(&[&["a", "b", "c", "d"]]);
        let fine = partition(&[&["a", "b"], &["c", "d"]]);
        assert!((overlap(&coarse, &fine).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_singleton_side_degenerate() {
        let a = partition(&[&["dog", "bear"], &["cat"]]);
        let b = partition(&[&["dog"], &["bear"], &["cat"]]);
        assert!(overlap(&a, &b).unwrap().is_nan());
    }

    #[test]
    fn test_commutative() {
        let a = partition(&[&["a", "b", "c"], &["d"]]);
        let b = partition(&[&["a", "b"], &["c", "d"]]);
        let ab = overlap(&a, &b).unwrap();
        let ba = overlap(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-10);
    }
}
