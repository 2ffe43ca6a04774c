//! # sheetgrid
//!
//! A cursor-based spreadsheet report writer with CSS-like style classes.
//!
//! Cells are appended left to right, rows advance explicitly, and merged
//! regions occupy a rectangle that later appends flow around. Styling is a
//! space-separated string of class names ("bold celled", "red right")
//! resolved against a registry at render time. The whole grid buffers in
//! memory and flushes to XLSX bytes in one render pass.
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid::prelude::*;
//!
//! let mut writer = GridWriter::new().with_file_name("sales.xlsx");
//!
//! // A merged title above a small table
//! writer.append_cell("Sales", CellOptions::new().span(2).style("bold center celled")).unwrap();
//!
//! let columns = vec![
//!     TableColumn::new("region", "Region").with_width(14.0),
//!     TableColumn::new("total", "Total").with_style("right"),
//! ];
//! let rows = vec![
//!     record([("region", CellValue::from("North")), ("total", CellValue::from(1200))]),
//!     record([("region", CellValue::from("South")), ("total", CellValue::from(980))]),
//! ];
//! writer.write_table(&columns, &rows).unwrap();
//!
//! let rendered = writer.render().unwrap();
//! assert_eq!(rendered.file_name.as_deref(), Some("sales.xlsx"));
//! ```

pub mod prelude;

// Re-export core types
pub use sheetgrid_core::{
    record,
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    CellOptions,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    Formatter,
    GridCell,
    HorizontalAlignment,
    NumberFormat,
    PatternType,
    Record,
    Result,
    // Grid types
    SheetGrid,
    Slot,
    // Style types
    Style,
    StyleFn,
    StyleRegistry,
    // Table types
    TableColumn,
    Underline,
    VerticalAlignment,
    // Constants
    MAX_COLS,
    MAX_ROWS,
};

// Re-export writer types
pub use sheetgrid_xlsx::{GridWriter, RenderedWorkbook, XlsxError, XlsxResult};

use std::path::Path;

/// Extension trait for saving rendered output to disk
pub trait RenderedWorkbookExt {
    /// Write the rendered bytes to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()>;
}

impl RenderedWorkbookExt for RenderedWorkbook {
    fn save<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}
