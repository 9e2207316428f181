//! Shared pairwise-relation scan over two partitions.
//!
//! Every set-similarity and information-theoretic measure in this crate is
//! a function of the same 2x2 contingency table: enumerate each unordered
//! pair of distinct elements once and classify it as connected-in-a and/or
//! connected-in-b.

use crate::data::Partition;
use crate::error::{EvalError, Result};
use std::fmt::Display;
use std::hash::Hash;

/// Contingency table over pair-connectivity in two partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairCounts {
    /// Pairs connected in both partitions.
    pub both: u64,
    /// Pairs connected only in the first partition.
    pub a_only: u64,
    /// Pairs connected only in the second partition.
    pub b_only: u64,
    /// Pairs connected in neither partition.
    pub neither: u64,
}

impl PairCounts {
    /// Total number of unordered pairs, `C(N, 2)`.
    pub fn total(&self) -> u64 {
        self.both + self.a_only + self.b_only + self.neither
    }

    /// Pairs connected in the first partition.
    pub fn connected_a(&self) -> u64 {
        self.both + self.a_only
    }

    /// Pairs connected in the second partition.
    pub fn connected_b(&self) -> u64 {
        self.both + self.b_only
    }
}

/// Classify every unordered pair of distinct elements by its connectivity
/// in each partition.
///
/// Fails if the two partitions do not cover the same element set.
pub fn pair_counts<T>(a: &Partition<T>, b: &Partition<T>) -> Result<PairCounts>
where
    T: Eq + Hash + Clone + Display,
{
    if !a.same_elements(b) {
        return Err(EvalError::ElementSetMismatch);
    }

    let elements: Vec<&T> = a.elements().collect();
    let mut counts = PairCounts::default();
    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let in_a = a.connected(elements[i], elements[j]);
            let in_b = b.connected(elements[i], elements[j]);
            match (in_a, in_b) {
                (true, true) => counts.both += 1,
                (true, false) => counts.a_only += 1,
                (false, true) => counts.b_only += 1,
                (false, false) => counts.neither += 1,
            }
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Partition;

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
    fn test_pair_counts() {
        let a = partition(&[&["dog", "bear"], &["cat"]]);
        let b = partition(&[&["dog"], &["bear"], &["cat"]]);
        let counts = pair_counts(&a, &b).unwrap();
        assert_eq!(counts.both, 0);
        assert_eq!(counts.a_only, 1);
        assert_eq!(counts.b_only, 0);
        assert_eq!(counts.neither, 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_self_comparison() {
        let a = partition(&[&["a", "b", "c"], &["d"]]);
        let counts = pair_counts(&a, &a).unwrap();
        assert_eq!(counts.both, 3);
        assert_eq!(counts.a_only, 0);
        assert_eq!(counts.b_only, 0);
        assert_eq!(counts.neither, 3);
        assert_eq!(counts.connected_a(), a.connected_pairs());
    }

    #[test]
    fn test_mismatched_elements() {
        let a = partition(&[&["a", "b"]]);
        let b = partition(&[&["a", "c"]]);
        assert!(matches!(
            pair_counts(&a, &b),
            Err(EvalError::ElementSetMismatch)
        ));
    }
}
