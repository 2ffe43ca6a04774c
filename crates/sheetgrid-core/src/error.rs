//! Error types for sheetgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetgrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u16),

    /// Horizontal span must cover at least one cell
    #[error("Invalid span {0}: must be >= 1")]
    InvalidSpan(u16),

    /// Vertical span must cover at least one cell
    #[error("Invalid rowspan {0}: must be >= 1")]
    InvalidRowSpan(u32),

    /// A table column referenced a field missing from a record
    #[error("Record is missing field: {0}")]
    MissingField(String),
}
