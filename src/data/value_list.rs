//! Value list: a mapping from element to finite real value.

use crate::data::tied_ranked_list::TiedRankedList;
use crate::error::{EvalError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An immutable mapping from unique elements to finite values.
///
/// Built once from validated input; no value is ever NaN or infinite and no
/// element appears twice. Typically represents the scores an algorithm
/// assigned to a set of items.
#[derive(Debug, Clone)]
pub struct ValueList<T> {
    map: HashMap<T, f64>,
}

impl<T> ValueList<T>
where
    T: Eq + Hash + Clone + Display,
{
    /// Create a value list from a key-value mapping.
    ///
    /// Fails if any value is NaN or infinite.
    pub fn from_map(map: HashMap<T, f64>) -> Result<Self> {
        for (element, value) in &map {
            if !value.is_finite() {
                return Err(EvalError::NonFiniteValue {
                    element: element.to_string(),
                });
            }
        }
        Ok(Self { map })
    }

    /// Value of an element, if present.
    pub fn get(&self, t: &T) -> Option<f64> {
        self.map.get(t).copied()
    }

    /// Whether an element is present.
    pub fn contains(&self, t: &T) -> bool {
        self.map.contains_key(t)
    }

    /// Iterate over the elements in no particular order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.map.keys()
    }

    /// Iterate over `(element, value)` entries in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, f64)> {
        self.map.iter().map(|(t, v)| (t, *v))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `self` and `other` hold exactly the same element set.
    pub fn same_elements(&self, other: &Self) -> bool {
        self.len() == other.len() && self.map.keys().all(|t| other.contains(t))
    }

    /// Convert to a tied ranked list by grouping elements with equal value
    /// into the same rank, ranks ordered by increasing value.
    pub fn to_tied_ranked(&self) -> TiedRankedList<T> {
        let mut entries: Vec<(&T, f64)> = self.map.iter().map(|(t, v)| (t, *v)).collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut ranks: Vec<HashSet<T>> = Vec::new();
        let mut last_value: Option<f64> = None;
        for (t, v) in entries {
            match last_value {
                Some(prev) if prev == v => {
                    if let Some(group) = ranks.last_mut() {
                        group.insert(t.clone());
                    }
                }
                _ => {
                    let mut group = HashSet::new();
                    group.insert(t.clone());
                    ranks.push(group);
                    last_value = Some(v);
                }
            }
        }
        TiedRankedList::from_rank_sets(ranks)
    }

    /// Write the list back out in the marked file format.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# values")?;
        for (t, v) in &self.map {
            writeln!(writer, "{} {}", t, v)?;
        }
        Ok(())
    }
}

impl ValueList<String> {
    /// Build a value list from tokenized records (two tokens per line:
    /// element, then a finite decimal value).
    pub fn from_records(records: Vec<Vec<String>>) -> Result<Self> {
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            if record.len() != 2 {
                return Err(EvalError::TokenCount {
                    expected: 2,
                    actual: record.len(),
                    line: record.join(" "),
                });
            }
            let value: f64 = record[1].parse().map_err(|_| EvalError::InvalidNumber {
                token: record[1].clone(),
            })?;
            let mut record = record;
            let element = record.swap_remove(0);
            if map.contains_key(&element) {
                return Err(EvalError::DuplicateElement { element });
            }
            map.insert(element, value);
        }
        Self::from_map(map)
    }
}

impl<T: Eq + Hash> PartialEq for ValueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}
