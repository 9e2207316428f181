//! Simple Matching Coefficient over partitions.
//!
//! Fraction of unordered element pairs on which the two partitions agree,
//! counting both co-connected and co-disconnected pairs.

use crate::algorithms::pairs::pair_counts;
use crate::data::{Dataset, Partition};
use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;

/// Simple Matching Coefficient of two partitions. Commutative.
pub fn smc<T>(a: &Partition<T>, b: &Partition<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    let counts = pair_counts(a, b)?;
    Ok((counts.both + counts.neither) as f64 / counts.total() as f64)
}

/// Dispatch over two parsed datasets; applicable to partition pairs only.
pub fn smc_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a, b) {
        (Dataset::Partition(pa), Dataset::Partition(pb)) => smc(pa, pb).map(Some),
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
        let p = partition(&[&["a", "b"], &["c"]]);
        assert!((smc(&p, &p).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_agreement() {
        let a = partition(&[&["dog", "bear"], &["cat"]]);
        let b = partition(&[&["dog"], &["bear"], &["cat"]]);
        // Pairs: (dog,bear) disagrees; (dog,cat) and (bear,cat) agree.
        let value = smc(&a, &b).unwrap();
        assert!((value - 2.0 / 3.0).abs() < 1e-10);
        assert!(value < 1.0);
    }

    #[test]
    fn test_commutative() {
        let a = partition(&[&["a", "b", "c"], &["d"]]);
        let b = partition(&[&["a", "b"], &["c", "d"]]);
        let ab = smc(&a, &b).unwrap();
        let ba = smc(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-10);
    }
}
