//! # sheetgrid-xlsx
//!
//! The [`GridWriter`]: a cursor-based writer that buffers a sparse cell grid
//! (from `sheetgrid-core`) and flushes it into an XLSX workbook via the
//! `rust_xlsxwriter` backend in one final render pass.
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_xlsx::GridWriter;
//! use sheetgrid_core::CellOptions;
//!
//! let mut writer = GridWriter::new().with_file_name("report.xlsx");
//! writer.append_cell("Quarterly totals", CellOptions::new().span(2).style("bold celled")).unwrap();
//! writer.advance_row();
//! writer.append("Q1").unwrap();
//! writer.append("Q2").unwrap();
//!
//! let rendered = writer.render().unwrap();
//! assert_eq!(rendered.file_name.as_deref(), Some("report.xlsx"));
//! assert!(!rendered.bytes.is_empty());
//! ```

pub mod error;
mod format;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use writer::{GridWriter, RenderedWorkbook};
