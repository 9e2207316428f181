//! Core data model: the four dataset shapes and their tagged union.
//!
//! All entities are built once from validated input and are immutable
//! thereafter; construction is the only place invariants are checked.

pub mod dataset;
pub mod partition;
pub mod ranked_list;
pub mod tied_ranked_list;
pub mod tokens;
pub mod value_list;

pub use dataset::Dataset;
pub use partition::Partition;
pub use ranked_list::RankedList;
pub use tied_ranked_list::TiedRankedList;
pub use tokens::MarkedFile;
pub use value_list::ValueList;
