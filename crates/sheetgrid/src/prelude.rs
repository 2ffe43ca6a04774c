//! Prelude module - common imports for sheetgrid users
//!
//! ```rust
//! use sheetgrid::prelude::*;
//! ```

pub use crate::{
    record,
    BorderLineStyle,
    CellOptions,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    // Writer types
    GridWriter,
    HorizontalAlignment,
    NumberFormat,
    Record,
    RenderedWorkbook,
    // Extension traits
    RenderedWorkbookExt,
    Result,
    // Style types
    Style,
    StyleRegistry,
    // Table types
    TableColumn,
    Underline,
    VerticalAlignment,
    XlsxError,
    XlsxResult,
};
