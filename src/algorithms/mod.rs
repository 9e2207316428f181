//! Agreement measures between same-shaped datasets.
//!
//! Each measure lives in its own module and exposes two entry points: a
//! strongly-typed function requiring both arguments in the needed shape,
//! and a `*_datasets` wrapper over the tagged union that performs lossless
//! tie-shape upgrades and returns `Ok(None)` when the shape pairing has no
//! defined algorithm.

pub mod cosine;
pub mod jaccard;
pub mod kendall;
pub mod mi;
pub mod overlap;
pub mod pairs;
pub mod pearson;
pub mod smc;
pub mod sorensen;
pub mod spearman;

pub use cosine::{cosine_datasets, cosine_partitions, cosine_values};
pub use jaccard::{jaccard, jaccard_datasets};
pub use kendall::{kendall, kendall_datasets, max_kendall};
pub use mi::{nmi, nmi_datasets};
pub use overlap::{overlap, overlap_datasets};
pub use pairs::{pair_counts, PairCounts};
pub use pearson::{pearson_datasets, pearson_partitions, pearson_values};
pub use smc::{smc, smc_datasets};
pub use sorensen::{sorensen, sorensen_datasets};
pub use spearman::{spearman, spearman_datasets};
