//! # sheetgrid-core
//!
//! Core data structures for the sheetgrid report writer:
//! - [`Style`] and [`StyleRegistry`] - named style classes ("bold", "red",
//!   "celled", ...) and their resolution into merged attribute groups
//! - [`SheetGrid`] - a sparse, cursor-driven cell grid buffered in memory
//!   until a final render pass
//! - [`TableColumn`] and [`Record`] - column schemas for table-shaped input
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_core::{SheetGrid, CellOptions, StyleRegistry};
//!
//! let registry = StyleRegistry::builtin();
//! let mut grid = SheetGrid::new();
//!
//! grid.append("Report", CellOptions::new().span(2).style("bold celled")).unwrap();
//! grid.advance_row();
//! grid.append("Total", CellOptions::new()).unwrap();
//!
//! assert_eq!(grid.max_row(), 1);
//! assert_eq!(grid.max_col(), 2);
//! assert!(!registry.resolve("bold celled").is_empty());
//! ```

pub mod error;
pub mod grid;
pub mod style;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use grid::{CellOptions, GridCell, SheetGrid, Slot};
pub use table::{record, Formatter, Record, StyleFn, TableColumn};
pub use value::CellValue;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, PatternType, Style, StyleRegistry, Underline,
    VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
