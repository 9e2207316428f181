//! Tagged union over the four dataset shapes.

use crate::data::tokens::MarkedFile;
use crate::data::{Partition, RankedList, TiedRankedList, ValueList};
use crate::error::{EvalError, Result};
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

/// A parsed dataset holding exactly one of the four admissible shapes.
///
/// The shape is chosen at parse time by the file's leading marker. A
/// `Dataset` exclusively owns its payload; comparisons that need a common
/// shape go through [`Dataset::to_tied_ranked`].
#[derive(Debug, Clone)]
pub enum Dataset<T> {
    /// Element-to-value mapping (`# values`).
    Values(ValueList<T>),
    /// Strict tie-free ranking (`# ranks`).
    Ranks(RankedList<T>),
    /// Ranking with ties (`# tie-ranks`).
    TiedRanks(TiedRankedList<T>),
    /// Unordered equivalence classes (`# partition`).
    Partition(Partition<T>),
}

impl<T> Dataset<T>
where
    T: Eq + Hash + Clone + Display,
{
    /// Whether this dataset is a value list.
    pub fn is_values(&self) -> bool {
        matches!(self, Dataset::Values(_))
    }

    /// Whether this dataset is a strict ranked list.
    pub fn is_ranks(&self) -> bool {
        matches!(self, Dataset::Ranks(_))
    }

    /// Whether this dataset is a tied ranked list.
    pub fn is_tied_ranks(&self) -> bool {
        matches!(self, Dataset::TiedRanks(_))
    }

    /// Whether this dataset is a partition.
    pub fn is_partition(&self) -> bool {
        matches!(self, Dataset::Partition(_))
    }

    /// The underlying value list, if that is the shape.
    pub fn as_values(&self) -> Option<&ValueList<T>> {
        match self {
            Dataset::Values(v) => Some(v),
            _ => None,
        }
    }

    /// The underlying strict ranked list, if that is the shape.
    pub fn as_ranks(&self) -> Option<&RankedList<T>> {
        match self {
            Dataset::Ranks(r) => Some(r),
            _ => None,
        }
    }

    /// The underlying tied ranked list, if that is the shape.
    pub fn as_tied_ranks(&self) -> Option<&TiedRankedList<T>> {
        match self {
            Dataset::TiedRanks(t) => Some(t),
            _ => None,
        }
    }

    /// The underlying partition, if that is the shape.
    pub fn as_partition(&self) -> Option<&Partition<T>> {
        match self {
            Dataset::Partition(p) => Some(p),
            _ => None,
        }
    }

    /// Best-effort upgrade to the tie-aware rank shape.
    ///
    /// Value lists and strict ranked lists convert losslessly; partitions
    /// have no rank structure and yield `None`.
    pub fn to_tied_ranked(&self) -> Option<TiedRankedList<T>> {
        match self {
            Dataset::Values(v) => Some(v.to_tied_ranked()),
            Dataset::Ranks(r) => Some(r.to_tied_ranked()),
            Dataset::TiedRanks(t) => Some(t.clone()),
            Dataset::Partition(_) => None,
        }
    }

    /// A short name for the shape, for display purposes.
    pub fn shape(&self) -> &'static str {
        match self {
            Dataset::Values(_) => "values",
            Dataset::Ranks(_) => "ranks",
            Dataset::TiedRanks(_) => "tie-ranks",
            Dataset::Partition(_) => "partition",
        }
    }

    /// Write the dataset back out in the marked file format.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        match self {
            Dataset::Values(v) => v.write_to(path),
            Dataset::Ranks(r) => r.write_to(path),
            Dataset::TiedRanks(t) => t.write_to(path),
            Dataset::Partition(p) => p.write_to(path),
        }
    }
}

impl Dataset<String> {
    /// Parse a dataset file, dispatching on its shape marker.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let marked = MarkedFile::from_path(path)?;
        match marked.marker.as_str() {
            "values" => ValueList::from_records(marked.records).map(Dataset::Values),
            "ranks" => RankedList::from_records(marked.records).map(Dataset::Ranks),
            "tie-ranks" => {
                TiedRankedList::from_records(marked.records).map(Dataset::TiedRanks)
            }
            "partition" => Partition::from_records(marked.records).map(Dataset::Partition),
            _ => Err(EvalError::UnknownMarker {
                marker: marked.marker,
            }),
        }
    }
}

impl<T: Eq + Hash> PartialEq for Dataset<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Dataset::Values(a), Dataset::Values(b)) => a == b,
            (Dataset::Ranks(a), Dataset::Ranks(b)) => a == b,
            (Dataset::TiedRanks(a), Dataset::TiedRanks(b)) => a == b,
            (Dataset::Partition(a), Dataset::Partition(b)) => a == b,
            _ => false,
        }
    }
}
