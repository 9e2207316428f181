//! Error types for the rank-eval library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no shape marker: the first non-blank line must start with '#'")]
    MissingMarker,

    #[error("not a valid shape marker: '{marker}'")]
    UnknownMarker { marker: String },

    #[error("expected {expected} token(s) per line, got {actual}: '{line}'")]
    TokenCount {
        expected: usize,
        actual: usize,
        line: String,
    },

    #[error("not a number: '{token}'")]
    InvalidNumber { token: String },

    #[error("value for element '{element}' is not finite")]
    NonFiniteValue { element: String },

    #[error("duplicate element: '{element}'")]
    DuplicateElement { element: String },

    #[error("input contains an empty rank or group")]
    EmptyGroup,

    #[error("empty data: {0}")]
    EmptyData(String),

    #[error("the two datasets do not contain the same elements")]
    ElementSetMismatch,
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, EvalError>;
