//! Statistical agreement between a ground-truth dataset and candidates.
//!
//! This library compares one "truth" dataset against candidate datasets
//! using a family of agreement measures: rank correlation, value
//! correlation, set similarity, and information-theoretic agreement. It is
//! aimed at anyone validating an algorithm's ranking, scoring, or
//! clustering output against a reference.
//!
//! The library is organized into three modules:
//!
//! - **data**: the four immutable dataset shapes — [`ValueList`],
//!   [`RankedList`], [`TiedRankedList`], [`Partition`] — their conversions,
//!   and the [`Dataset`] tagged union parsed from marked text files
//! - **algorithms**: one module per measure (Kendall tau-b, Spearman,
//!   Pearson, Cosine, Jaccard, SMC, Sørensen–Dice, Overlap, NMI), each with
//!   a strongly-typed entry point and a shape-dispatching wrapper
//! - **compare**: the driver producing a per-candidate score [`Report`]
//!
//! # Example
//!
//! ```no_run
//! use rank_eval::prelude::*;
//!
//! let truth = Dataset::from_path("truth.txt").unwrap();
//! let candidate = Dataset::from_path("candidate.txt").unwrap();
//! let scores = score(&truth, &candidate).unwrap();
//! if let Some(tau) = scores.kendall {
//!     println!("Kendall tau-b: {tau:.4}");
//! }
//! ```
//!
//! [`ValueList`]: data::ValueList
//! [`RankedList`]: data::RankedList
//! [`TiedRankedList`]: data::TiedRankedList
//! [`Partition`]: data::Partition
//! [`Dataset`]: data::Dataset
//! [`Report`]: compare::Report

pub mod algorithms;
pub mod compare;
pub mod data;
pub mod error;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::algorithms::{
        cosine_datasets, cosine_partitions, cosine_values, jaccard, jaccard_datasets,
        kendall, kendall_datasets, max_kendall, nmi, nmi_datasets, overlap,
        overlap_datasets, pair_counts, pearson_datasets, pearson_partitions,
        pearson_values, smc, smc_datasets, sorensen, sorensen_datasets, spearman,
        spearman_datasets, PairCounts,
    };
    pub use crate::compare::{evaluate, score, Comparison, Report, Scores};
    pub use crate::data::{
        Dataset, MarkedFile, Partition, RankedList, TiedRankedList, ValueList,
    };
    pub use crate::error::{EvalError, Result};
}
