//! Partition: disjoint non-empty groups covering a unique element set.

use crate::error::{EvalError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An immutable partition of a finite element set into equivalence classes.
///
/// Groups carry no order and neither do the elements within a group.
#[derive(Debug, Clone)]
pub struct Partition<T> {
    groups: Vec<HashSet<T>>,
    index: HashMap<T, usize>,
}

impl<T> Partition<T>
where
    T: Eq + Hash + Clone + Display,
{
    /// Create a partition from its groups.
    ///
    /// Fails on empty groups or elements appearing in more than one group.
    pub fn from_groups(groups: Vec<Vec<T>>) -> Result<Self> {
        let mut index = HashMap::new();
        let mut group_sets = Vec::with_capacity(groups.len());
        for (i, group) in groups.into_iter().enumerate() {
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
            group_sets.push(set);
        }
        Ok(Self {
            groups: group_sets,
            index,
        })
    }

    /// Whether two elements belong to the same group.
    ///
    /// Elements not in the partition are connected to nothing, including
    /// themselves.
    pub fn connected(&self, a: &T, b: &T) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(ga), Some(gb)) => ga == gb,
            _ => false,
        }
    }

    /// The group containing an element, if present.
    pub fn group_of(&self, t: &T) -> Option<&HashSet<T>> {
        self.index.get(t).map(|&i| &self.groups[i])
    }

    /// Whether an element is present.
    pub fn contains(&self, t: &T) -> bool {
        self.index.contains_key(t)
    }

    /// Iterate over the groups in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = &HashSet<T>> {
        self.groups.iter()
    }

    /// Iterate over all elements in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.index.keys()
    }

    /// Number of elements across all groups.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the partition holds no elements.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of unordered element pairs sharing a group: sum of
    /// `C(|group|, 2)` over all groups.
    pub fn connected_pairs(&self) -> u64 {
        self.groups
            .iter()
            .map(|g| {
                let n = g.len() as u64;
                n * (n - 1) / 2
            })
            .sum()
    }

    /// Whether `self` and `other` hold exactly the same element set,
    /// independent of grouping.
    pub fn same_elements(&self, other: &Self) -> bool {
        self.len() == other.len() && self.index.keys().all(|t| other.contains(t))
    }

    /// Write the partition back out in the marked file format.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# partition")?;
        for group in &self.groups {
            let line: Vec<String> = group.iter().map(|t| t.to_string()).collect();
            writeln!(writer, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl Partition<String> {
    /// Build from tokenized records; tokens on the same line form one group.
    pub fn from_records(records: Vec<Vec<String>>) -> Result<Self> {
        Self::from_groups(records)
    }
}

impl<T: Eq + Hash> PartialEq for Partition<T> {
    fn eq(&self, other: &Self) -> bool {
        // Group order is meaningless: partitions are equal when every group
        // of one is a group of the other and the element sets match.
        self.index.len() == other.index.len()
            && self.groups.iter().all(|group| {
                group.iter().next().map_or(true, |t| {
                    other
                        .index
                        .get(t)
                        .map_or(false, |&i| &other.groups[i] == group)
                })
            })
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
    fn test_connected() {
        let p = partition(&[&["dog", "bear"], &["cat"]]);
        assert!(p.connected(&"dog".to_string(), &"bear".to_string()));
        assert!(!p.connected(&"dog".to_string(), &"cat".to_string()));
        assert!(!p.connected(&"dog".to_string(), &"fox".to_string()));
        let group = p.group_of(&"dog".to_string()).unwrap();
        assert!(group.contains("bear"));
        assert!(p.group_of(&"fox".to_string()).is_none());
    }

    #[test]
    fn test_duplicate_across_groups() {
        let result = Partition::from_groups(vec![
            vec!["cat".to_string()],
            vec!["cat".to_string()],
        ]);
        assert!(matches!(result, Err(EvalError::DuplicateElement { .. })));
    }

    #[test]
    fn test_connected_pairs() {
        let p = partition(&[&["a", "b", "c"], &["d", "e"], &["f"]]);
        assert_eq!(p.connected_pairs(), 4);
    }

    #[test]
    fn test_equality_ignores_group_order() {
        let p = partition(&[&["a", "b"], &["c"]]);
        let q = partition(&[&["c"], &["b", "a"]]);
        assert_eq!(p, q);
        let r = partition(&[&["a"], &["b", "c"]]);
        assert_ne!(p, r);
    }
}
