//! Pearson correlation over value lists and over partitions.
//!
//! The value-list variant is the classic sample correlation with population
//! (divide-by-N) standard deviations, each side centered by its own mean.
//! The partition variant models "pair (i, j) connected in partition X" as a
//! Bernoulli indicator over all `C(N, 2)` unordered pairs and correlates
//! the two indicators.

use crate::data::{Dataset, Partition, ValueList};
use crate::error::{EvalError, Result};
use std::fmt::Display;
use std::hash::Hash;

/// Pearson correlation of two value lists.
///
/// Commutative. Fails if the lists do not cover the same element set or
/// are empty.
pub fn pearson_values<T>(a: &ValueList<T>, b: &ValueList<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    if !a.same_elements(b) {
        return Err(EvalError::ElementSetMismatch);
    }
    if a.is_empty() {
        return Err(EvalError::EmptyData(
            "cannot average an empty value list".to_string(),
        ));
    }

    // Align both sequences by shared element key.
    let pairs: Vec<(f64, f64)> = a
        .entries()
        .map(|(t, va)| {
            b.get(t)
                .map(|vb| (va, vb))
                .ok_or(EvalError::ElementSetMismatch)
        })
        .collect::<Result<_>>()?;

    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|(va, _)| va).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|(_, vb)| vb).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (va, vb) in &pairs {
        cov += (va - mean_a) * (vb - mean_b);
        var_a += (va - mean_a).powi(2);
        var_b += (vb - mean_b).powi(2);
    }
    cov /= n;
    var_a /= n;
    var_b /= n;

    Ok(cov / (var_a.sqrt() * var_b.sqrt()))
}

/// Pearson correlation of two partitions over their pair-connectivity
/// indicators.
///
/// Commutative. Fails if the partitions do not cover the same element set.
pub fn pearson_partitions<T>(a: &Partition<T>, b: &Partition<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    if !a.same_elements(b) {
        return Err(EvalError::ElementSetMismatch);
    }

    let count = a.len() as u64;
    let total_pairs = count * count.saturating_sub(1) / 2;
    let total = total_pairs as f64;

    let connected_a = a.connected_pairs();
    let connected_b = b.connected_pairs();
    let p_a = connected_a as f64 / total;
    let p_b = connected_b as f64 / total;

    // Bernoulli variance via the pair-count decomposition.
    let var_a = (connected_a as f64 * (1.0 - p_a).powi(2)
        + (total_pairs - connected_a) as f64 * p_a.powi(2))
        / total;
    let var_b = (connected_b as f64 * (1.0 - p_b).powi(2)
        + (total_pairs - connected_b) as f64 * p_b.powi(2))
        / total;

    let elements: Vec<&T> = a.elements().collect();
    let mut cov = 0.0;
    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let ind_a = if a.connected(elements[i], elements[j]) {
                1.0
            } else {
                0.0
            };
            let ind_b = if b.connected(elements[i], elements[j]) {
                1.0
            } else {
                0.0
            };
            cov += (ind_a - p_a) * (ind_b - p_b);
        }
    }
    cov /= total;

    Ok(cov / (var_a.sqrt() * var_b.sqrt()))
}

/// Dispatch over two parsed datasets.
///
/// Applicable to a pair of value lists or a pair of partitions; returns
/// `Ok(None)` for every other shape pairing.
pub fn pearson_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a, b) {
        (Dataset::Values(va), Dataset::Values(vb)) => pearson_values(va, vb).map(Some),
        (Dataset::Partition(pa), Dataset::Partition(pb)) => {
            pearson_partitions(pa, pb).map(Some)
        }
        _ => Ok(None),
    }
}
