//! Jaccard index over partitions.
//!
//! Ratio of pairs connected in both partitions to pairs connected in at
//! least one. When neither partition connects any pair (all groups are
//! singletons) the ratio is 0/0 and the NaN is returned as-is.

use crate::algorithms::pairs::pair_counts;
use crate::data::{Dataset, Partition};
use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;

/// Jaccard index of two partitions. Commutative.
pub fn jaccard<T>(a: &Partition<T>, b: &Partition<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    let counts = pair_counts(a, b)?;
    let union = counts.both + counts.a_only + counts.b_only;
    Ok(counts.both as f64 / union as f64)
}

/// Dispatch over two parsed datasets; applicable to partition pairs only.
pub fn jaccard_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a, b) {
        (Dataset::Partition(pa), Dataset::Partition(pb)) => jaccard(pa, pb).map(Some),
        _ => Ok(None),
    }
}
