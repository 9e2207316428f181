//! Strict ranked list: a total order over a unique element set, no ties.

use crate::data::tied_ranked_list::TiedRankedList;
use crate::error::{EvalError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An immutable strict ranking: each element holds a unique 0-based position.
#[derive(Debug, Clone)]
pub struct RankedList<T> {
    order: Vec<T>,
    index: HashMap<T, usize>,
}

impl<T> RankedList<T>
where
    T: Eq + Hash + Clone + Display,
{
    /// Create a ranked list from an ordered sequence of elements.
    ///
    /// Fails if the sequence contains duplicates.
    pub fn from_elements(order: Vec<T>) -> Result<Self> {
        let mut index = HashMap::with_capacity(order.len());
        for (i, t) in order.iter().enumerate() {
            if index.contains_key(t) {
                return Err(EvalError::DuplicateElement {
                    element: t.to_string(),
                });
            }
            index.insert(t.clone(), i);
        }
        Ok(Self { order, index })
    }

    /// The 0-based position of an element, if present.
    pub fn position(&self, t: &T) -> Option<usize> {
        self.index.get(t).copied()
    }

    /// Whether an element is present.
    pub fn contains(&self, t: &T) -> bool {
        self.index.contains_key(t)
    }

    /// Iterate over the elements in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Convert to a tied ranked list where every element is its own
    /// singleton rank, preserving order.
    pub fn to_tied_ranked(&self) -> TiedRankedList<T> {
        let ranks = self
            .order
            .iter()
            .map(|t| {
                let mut set = HashSet::with_capacity(1);
                set.insert(t.clone());
                set
            })
            .collect();
        TiedRankedList::from_rank_sets(ranks)
    }

    /// Write the list back out in the marked file format.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# ranks")?;
        for t in &self.order {
            writeln!(writer, "{}", t)?;
        }
        Ok(())
    }
}

impl RankedList<String> {
    /// Build from tokenized records (exactly one token per line; line order
    /// defines the rank order).
    pub fn from_records(records: Vec<Vec<String>>) -> Result<Self> {
        let mut order = Vec::with_capacity(records.len());
        for record in records {
            if record.len() != 1 {
                return Err(EvalError::TokenCount {
                    expected: 1,
                    actual: record.len(),
                    line: record.join(" "),
                });
            }
            let mut record = record;
            order.push(record.swap_remove(0));
        }
        Self::from_elements(order)
    }
}

impl<T: PartialEq> PartialEq for RankedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}
