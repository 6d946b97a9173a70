//! Error types for result-set metadata access.

use thiserror::Error;

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for result-set metadata operations.
///
/// Construction can only fail with `InvalidResult`. The lookup errors are
/// local to the failing call and leave the directory usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Result set declared no columns.
    #[error("Invalid result: at least one column is required")]
    InvalidResult,

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Column not found by name.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },
}

impl Error {
    /// Create a column-not-found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }
}
