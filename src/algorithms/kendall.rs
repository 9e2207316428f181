//! Kendall tau-b rank correlation with tie correction.
//!
//! For every unordered pair of distinct elements, the pair is concordant
//! when both lists order it the same way and discordant when they disagree;
//! pairs tied on either side contribute nothing. With `n = C(N, 2)` and
//! `n1`, `n2` the tied-pair counts of each side:
//!
//! ```text
//! tau_b = (concordant - discordant) / (sqrt(n - n1) * sqrt(n - n2))
//! ```
//!
//! A fully tied side makes the denominator zero; the NaN is returned as-is.

use crate::data::{Dataset, TiedRankedList};
use crate::error::{EvalError, Result};
use std::fmt::Display;
use std::hash::Hash;

/// Kendall tau-b correlation of two tied ranked lists.
///
/// Commutative. Fails if the lists do not cover the same element set.
pub fn kendall<T>(a: &TiedRankedList<T>, b: &TiedRankedList<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    if !a.same_elements(b) {
        return Err(EvalError::ElementSetMismatch);
    }

    let elements: Vec<&T> = a.elements().collect();
    let ranks_a: Vec<i64> = ranks_of(a, &elements)?;
    let ranks_b: Vec<i64> = ranks_of(b, &elements)?;

    let mut numerator: i64 = 0;
    for i in 0..elements.len() {
        for j in (i + 1)..elements.len() {
            let sign = (ranks_a[i] - ranks_a[j]) * (ranks_b[i] - ranks_b[j]);
            if sign > 0 {
                numerator += 1;
            } else if sign < 0 {
                numerator -= 1;
            }
        }
    }

    let count = elements.len() as u64;
    let n = count * (count.saturating_sub(1)) / 2;
    let n1 = a.tied_pairs();
    let n2 = b.tied_pairs();

    Ok(numerator as f64 / (((n - n1) as f64).sqrt() * ((n - n2) as f64).sqrt()))
}

/// Maximum tau-b attainable between `x` and any tie-free total order: the
/// correlation of `x` with its own rank groups flattened into singleton
/// ranks, preserving group order.
pub fn max_kendall<T>(x: &TiedRankedList<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    kendall(x, &x.flatten())
}

/// Dispatch over two parsed datasets.
///
/// Applicable whenever both sides upgrade losslessly to the tie-aware rank
/// shape; returns `Ok(None)` otherwise (e.g. when either is a partition).
pub fn kendall_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a.to_tied_ranked(), b.to_tied_ranked()) {
        (Some(ta), Some(tb)) => kendall(&ta, &tb).map(Some),
        _ => Ok(None),
    }
}

fn ranks_of<T>(list: &TiedRankedList<T>, elements: &[&T]) -> Result<Vec<i64>>
where
    T: Eq + Hash + Clone + Display,
{
    elements
        .iter()
        .map(|t| {
            list.rank_of(t)
                .map(|r| r as i64)
                .ok_or(EvalError::ElementSetMismatch)
        })
        .collect()
}
