//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while building or rendering a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// Grid/style error
    #[error("Grid error: {0}")]
    Core(#[from] sheetgrid_core::Error),

    /// Error raised by the spreadsheet backend
    #[error("Backend error: {0}")]
    Backend(#[from] rust_xlsxwriter::XlsxError),

    /// I/O error while saving rendered output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
