//! Normalized Mutual Information over partitions.
//!
//! Built from the 2x2 pair-connectivity contingency table. With cell count
//! `c`, row margin `r`, column margin `m`, and `N` total pairs, each cell
//! contributes `(c/N) * log2(N*c / (r*m))`, with zero-count cells
//! contributing 0. Marginal entropies use the same log2 convention and come
//! out as negative sums, hence the negated normalization:
//!
//! ```text
//! nmi = -(2 * MI) / (H1 + H2)
//! ```

use crate::algorithms::pairs::pair_counts;
use crate::data::{Dataset, Partition};
use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;

/// Normalized Mutual Information of two partitions. Commutative.
pub fn nmi<T>(a: &Partition<T>, b: &Partition<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    let counts = pair_counts(a, b)?;
    let n = counts.total() as f64;

    let row = [counts.connected_a(), counts.total() - counts.connected_a()];
    let col = [counts.connected_b(), counts.total() - counts.connected_b()];
    let cells = [
        (counts.both, row[0], col[0]),
        (counts.a_only, row[0], col[1]),
        (counts.b_only, row[1], col[0]),
        (counts.neither, row[1], col[1]),
    ];

    let mut mi = 0.0;
    for (cell, r, c) in cells {
        if cell > 0 {
            let cell = cell as f64;
            mi += (cell / n) * (n * cell / (r as f64 * c as f64)).log2();
        }
    }

    let h1 = margin_entropy(&row, n);
    let h2 = margin_entropy(&col, n);

    Ok(-(2.0 * mi) / (h1 + h2))
}

/// Dispatch over two parsed datasets; applicable to partition pairs only.
pub fn nmi_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a, b) {
        (Dataset::Partition(pa), Dataset::Partition(pb)) => nmi(pa, pb).map(Some),
        _ => Ok(None),
    }
}

/// Sum of `p * log2(p)` over the margin probabilities; zero margins are
/// skipped. The sum is zero or negative.
fn margin_entropy(margins: &[u64; 2], n: f64) -> f64 {
    margins
        .iter()
        .filter(|&&m| m > 0)
        .map(|&m| {
            let p = m as f64 / n;
            p * p.log2()
        })
        .sum()
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
    fn test_self_comparison_is_one() {
        let p = partition(&[&["a", "b"], &["c"]]);
        assert!((nmi(&p, &p).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_commutative() {
        let a = partition(&[&["a", "b", "c"], &["d", "e"]]);
        let b = partition(&[&["a", "b"], &["c", "d"], &["e"]]);
        let ab = nmi(&a, &b).unwrap();
        let ba = nmi(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-10);
    }

    #[test]
    fn test_crossing_partitions_between_zero_and_one() {
        let a = partition(&[&["a", "b"], &["c", "d"]]);
        let b = partition(&[&["a", "c"], &["b", "d"]]);
        let value = nmi(&a, &b).unwrap();
        assert!(value > 0.0 && value < 1.0);
    }

    #[test]
    fn test_known_value() {
        // a = {a,b},{c}; b fully split. MI = 0 since b's margin is pure.
        let a = partition(&[&["a", "b"], &["c"]]);
        let b = partition(&[&["a"], &["b"], &["c"]]);
        let value = nmi(&a, &b).unwrap();
        assert!(value.abs() < 1e-10);
    }
}
