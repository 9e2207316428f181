//! Tied ranked list: a total order over groups of equally-ranked elements.

use crate::error::{EvalError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An immutable ordered sequence of ranks, where each rank is a non-empty
/// set of elements considered equally ordered.
///
/// This is the common tie-aware shape that both [`RankedList`] and
/// [`ValueList`] upgrade to losslessly before rank correlation. The
/// element-to-rank index is derived at construction and cached.
///
/// [`RankedList`]: crate::data::RankedList
/// [`ValueList`]: crate::data::ValueList
#[derive(Debug, Clone)]
pub struct TiedRankedList<T> {
    ranks: Vec<HashSet<T>>,
    index: HashMap<T, usize>,
}

impl<T> TiedRankedList<T>
where
    T: Eq + Hash + Clone + Display,
{
    /// Create a tied ranked list from groups in rank order.
    ///
    /// Fails on empty groups or elements appearing in more than one group.
    pub fn from_ranks(ranks: Vec<Vec<T>>) -> Result<Self> {
        let mut index = HashMap::new();
        let mut rank_sets = Vec::with_capacity(ranks.len());
        for (i, group) in ranks.into_iter().enumerate() {
            if group.is_empty() {
                return Err(EvalError::EmptyGroup);
            }
            let mut set = HashSet::with_capacity(group.len());
            for t in group {
                if index.contains_key(&t) {
                    return Err(EvalError::DuplicateElement {
                        element: t.to_string(),
                    });
                }
                index.insert(t.clone(), i);
                set.insert(t);
            }
            rank_sets.push(set);
        }
        Ok(Self {
            ranks: rank_sets,
            index,
        })
    }

    /// Build from rank groups already known to satisfy the invariants
    /// (unique elements, non-empty groups).
    pub(crate) fn from_rank_sets(ranks: Vec<HashSet<T>>) -> Self {
        let mut index = HashMap::new();
        for (i, group) in ranks.iter().enumerate() {
            for t in group {
                index.insert(t.clone(), i);
            }
        }
        Self { ranks, index }
    }

    /// The rank index of an element, if present.
    pub fn rank_of(&self, t: &T) -> Option<usize> {
        self.index.get(t).copied()
    }

    /// Whether an element is present.
    pub fn contains(&self, t: &T) -> bool {
        self.index.contains_key(t)
    }

    /// Iterate over the rank groups in increasing rank order.
    ///
    /// The iterator is finite and restartable: calling this method again
    /// yields the groups from the beginning.
    pub fn ranks(&self) -> impl Iterator<Item = &HashSet<T>> {
        self.ranks.iter()
    }

    /// Iterate over all elements in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.index.keys()
    }

    /// Number of elements across all ranks.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of ranks.
    pub fn rank_count(&self) -> usize {
        self.ranks.len()
    }

    /// Number of unordered element pairs sharing a rank: sum of
    /// `C(|group|, 2)` over all ranks.
    pub fn tied_pairs(&self) -> u64 {
        self.ranks
            .iter()
            .map(|g| {
                let n = g.len() as u64;
                n * (n - 1) / 2
            })
            .sum()
    }

    /// Whether `self` and `other` hold exactly the same element set,
    /// independent of rank structure.
    pub fn same_elements(&self, other: &Self) -> bool {
        self.len() == other.len() && self.index.keys().all(|t| other.contains(t))
    }

    /// The tie-free list obtained by flattening every rank group into
    /// singleton ranks, preserving group order.
    pub fn flatten(&self) -> TiedRankedList<T> {
        let ranks = self
            .ranks
            .iter()
            .flat_map(|group| {
                group.iter().map(|t| {
                    let mut set = HashSet::with_capacity(1);
                    set.insert(t.clone());
                    set
                })
            })
            .collect();
        Self::from_rank_sets(ranks)
    }

    /// Write the list back out in the marked file format.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# tie-ranks")?;
        for group in &self.ranks {
            let line: Vec<String> = group.iter().map(|t| t.to_string()).collect();
            writeln!(writer, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl TiedRankedList<String> {
    /// Build from tokenized records; tokens on the same line form one rank.
    pub fn from_records(records: Vec<Vec<String>>) -> Result<Self> {
        Self::from_ranks(records)
    }
}

impl<T: Eq + Hash> PartialEq for TiedRankedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranks == other.ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tied(groups: &[&[&str]]) -> TiedRankedList<String> {
        TiedRankedList::from_ranks(
            groups
                .iter()
                .map(|g| g.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_rank_index() {
        let list = tied(&[&["cat", "dog"], &["bear"]]);
        assert_eq!(list.rank_of(&"cat".to_string()), Some(0));
        assert_eq!(list.rank_of(&"dog".to_string()), Some(0));
        assert_eq!(list.rank_of(&"bear".to_string()), Some(1));
        assert_eq!(list.rank_of(&"fox".to_string()), None);
        assert_eq!(list.len(), 3);
        assert_eq!(list.rank_count(), 2);
    }

    #[test]
    fn test_duplicate_across_ranks() {
        let result = TiedRankedList::from_ranks(vec![
            vec!["cat".to_string()],
            vec!["cat".to_string()],
        ]);
        assert!(matches!(result, Err(EvalError::DuplicateElement { .. })));
    }

    #[test]
    fn test_empty_rank() {
        let result = TiedRankedList::from_ranks(vec![vec!["cat".to_string()], vec![]]);
        assert!(matches!(result, Err(EvalError::EmptyGroup)));
    }

    #[test]
    fn test_tied_pairs() {
        let list = tied(&[&["a", "b", "c"], &["d"], &["e", "f"]]);
        // C(3,2) + C(1,2) + C(2,2) = 3 + 0 + 1
        assert_eq!(list.tied_pairs(), 4);
    }

    #[test]
    fn test_ranks_iterator_restartable() {
        let list = tied(&[&["a"], &["b"]]);
        assert_eq!(list.ranks().count(), 2);
        assert_eq!(list.ranks().count(), 2);
    }

    #[test]
    fn test_flatten_preserves_group_order() {
        let list = tied(&[&["a", "b"], &["c"]]);
        let flat = list.flatten();
        assert_eq!(flat.rank_count(), 3);
        assert_eq!(flat.tied_pairs(), 0);
        // Group order survives: c must rank after both a and b.
        let c_rank = flat.rank_of(&"c".to_string()).unwrap();
        assert_eq!(c_rank, 2);
    }
}
