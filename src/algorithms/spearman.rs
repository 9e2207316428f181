//! Spearman's rank correlation coefficient.
//!
//! Each element is scored by its 1-based rank index on each side; the
//! coefficient is the Pearson correlation of the two rank scorings.

use crate::algorithms::pearson::pearson_values;
use crate::data::{Dataset, TiedRankedList, ValueList};
use crate::error::{EvalError, Result};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Spearman correlation of two tied ranked lists.
///
/// Commutative. Fails if the lists do not cover the same element set or
/// are empty.
pub fn spearman<T>(a: &TiedRankedList<T>, b: &TiedRankedList<T>) -> Result<f64>
where
    T: Eq + Hash + Clone + Display,
{
    if !a.same_elements(b) {
        return Err(EvalError::ElementSetMismatch);
    }
    pearson_values(&rank_scores(a)?, &rank_scores(b)?)
}

/// Dispatch over two parsed datasets.
///
/// Applicable whenever both sides upgrade losslessly to the tie-aware rank
/// shape; returns `Ok(None)` otherwise.
pub fn spearman_datasets<T>(a: &Dataset<T>, b: &Dataset<T>) -> Result<Option<f64>>
where
    T: Eq + Hash + Clone + Display,
{
    match (a.to_tied_ranked(), b.to_tied_ranked()) {
        (Some(ta), Some(tb)) => spearman(&ta, &tb).map(Some),
        _ => Ok(None),
    }
}

fn rank_scores<T>(list: &TiedRankedList<T>) -> Result<ValueList<T>>
where
    T: Eq + Hash + Clone + Display,
{
    let mut map = HashMap::with_capacity(list.len());
    for (i, group) in list.ranks().enumerate() {
        for t in group {
            map.insert(t.clone(), (i + 1) as f64);
        }
    }
    ValueList::from_map(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RankedList;

    fn ranked(elements: &[&str]) -> TiedRankedList<String> {
        RankedList::from_elements(elements.iter().map(|s| s.to_string()).collect())
            .unwrap()
            .to_tied_ranked()
    }

    #[test]
    fn test_identical_is_one() {
        let a = ranked(&["dog", "bear", "cat"]);
        assert!((spearman(&a, &a.clone()).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_reversal_is_minus_one() {
        let a = ranked(&["dog", "bear", "cat"]);
        let b = ranked(&["cat", "bear", "dog"]);
        assert!((spearman(&a, &b).unwrap() + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_commutative() {
        let a = ranked(&["a", "b", "c", "d"]);
        let b = ranked(&["b", "d", "a", "c"]);
        let ab = spearman(&a, &b).unwrap();
        let ba = spearman(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-10);
    }
}
