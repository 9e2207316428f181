//! Cosine similarity over value lists and over partitions.
//!
//! Value lists are treated as vectors aligned by element key. Partitions
//! are treated as binary incidence vectors over all unordered element
//! pairs, which reduces to `|A ∩ B| / sqrt(|A| * |B|)` for the sets of
//! connected pairs.

use crate::algorithms::pairs::pair_counts;
use crate::data::{Dataset, Partition, ValueList};
use crate::error::{EvalError, Result};
use std::fmt::Display;
use std::hash::Hash;

/// Cosine similarity of two value lists.
///
/// Commutative. Fails if the lists do not cover the same element set.
pub fn cosine_values<T>(a: &ValueList<T>, b: &ValueList<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    if !a.same_elements(b) {
        return Err(EvalError::ElementSetMismatch);
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (t, va) in a.entries() {
        let vb = b.get(t).ok_or(EvalError::ElementSetMismatch)?;
        dot += va * vb;
        norm_a += va * va;
        norm_b += vb * vb;
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Cosine similarity of two partitions over their connected-pair sets.
///
/// Commutative. Fails if the partitions do not cover the same element set.
pub fn cosine_partitions<T>(a: &Partition<T>, b: &Partition<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    let counts = pair_counts(a, b)?;
    let product = counts.connected_a() as f64 * counts.connected_b() as f64;
    Ok(counts.both as f64 / product.sqrt())
}

/// Dispatch over two parsed datasets.
///
/// Applicable to a pair of value lists or a pair of partitions; returns
/// `Ok(None)` for every other shape pairing.
pub fn cosine_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a, b) {
        (Dataset::Values(va), Dataset::Values(vb)) => cosine_values(va, vb).map(Some),
        (Dataset::Partition(pa), Dataset::Partition(pb)) => {
            cosine_partitions(pa, pb).map(Some)
        }
        _ => Ok(None),
    }
}
