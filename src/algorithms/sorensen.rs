//! Sørensen–Dice coefficient over partitions.
//!
//! Derived from the Jaccard index rather than computed independently:
//! `dice = 2J / (1 + J)`.

use crate::algorithms::jaccard::jaccard;
use crate::data::{Dataset, Partition};
use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;

/// Sørensen–Dice coefficient of two partitions. Commutative.
pub fn sorensen<T>(a: &Partition<T>, b: &Partition<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    let j = jaccard(a, b)?;
    Ok(2.0 * j / (1.0 + j))
}

/// Dispatch over two parsed datasets; applicable to partition pairs only.
pub fn sorensen_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a, b) {
        (Dataset::Partition(pa), Dataset::Partition(pb)) => sorensen(pa, pb).map(Some),
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
    fn test_derived_identity() {
        let a = partition(&[&["a", "b", "c"], &["d", "e"]]);
        let b = partition(&[&["a", "b"], &["c", "d"], &["e"]]);
        let j = jaccard(&a, &b).unwrap();
        let s = sorensen(&a, &b).unwrap();
        assert!((s - 2.0 * j / (1.0 + j)).abs() < 1e-10);
    }

    #[test]
    fn test_self_comparison() {
        let p = partition(&[&["a", "b"], &["c"]]);
        assert!((sorensen(&p, &p).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_commutative() {
        let a = partition(&[&["a", "b", "c"], &["d"]]);
        let b = partition(&[&["a", "b"], &["c", "d"]]);
        let ab = sorensen(&a, &b).unwrap();
        let ba = sorensen(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-10);
    }
}
