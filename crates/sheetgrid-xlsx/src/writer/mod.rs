//! Cursor-based workbook writer
//!
//! [`GridWriter`] wraps a [`SheetGrid`] and a [`StyleRegistry`]: appends
//! accumulate in the grid, and [`GridWriter::render`] flushes the buffered
//! cells row-major into a `rust_xlsxwriter` workbook, merging spanned
//! regions and resolving style strings into backend formats.

use std::collections::HashMap;

use rust_xlsxwriter::{Format, Workbook};

use sheetgrid_core::{
    CellOptions, Error, Record, SheetGrid, Slot, StyleRegistry, TableColumn,
};

use crate::error::XlsxResult;
use crate::format::format_from_style;

/// The output of a render: serialized workbook bytes plus the file name the
/// writer was configured with, ready to hand to an HTTP response or a disk
/// write.
#[derive(Debug, Clone)]
pub struct RenderedWorkbook {
    /// The complete XLSX package
    pub bytes: Vec<u8>,
    /// Configured download/save name, if any
    pub file_name: Option<String>,
}

/// Cursor-based writer that buffers cells and renders them in one pass.
///
/// Rows and columns are 1-indexed. Cells carry style strings ("bold celled",
/// "red right", ...) resolved against the writer's registry only at render
/// time, so classes may be re-registered up until then.
#[derive(Debug)]
pub struct GridWriter {
    grid: SheetGrid,
    registry: StyleRegistry,
    sheet_name: String,
    file_name: Option<String>,
}

impl Default for GridWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GridWriter {
    /// Create a writer with the builtin style classes and sheet name "Sheet1"
    pub fn new() -> Self {
        Self {
            grid: SheetGrid::new(),
            registry: StyleRegistry::builtin(),
            sheet_name: "Sheet1".to_string(),
            file_name: None,
        }
    }

    /// Set the file name reported by the rendered output
    pub fn with_file_name<S: Into<String>>(mut self, file_name: S) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Replace the style registry
    pub fn with_registry(mut self, registry: StyleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the worksheet name
    pub fn with_sheet_name<S: Into<String>>(mut self, sheet_name: S) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    /// The underlying cell grid
    pub fn grid(&self) -> &SheetGrid {
        &self.grid
    }

    /// The style registry, for registering classes after construction
    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    /// The configured file name, if any
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Record a width for a 1-indexed column, applied at render
    pub fn set_column_width(&mut self, col: u16, width: f64) -> XlsxResult<()> {
        self.grid.set_column_width(col, width)?;
        Ok(())
    }

    /// Move the cursor to the start of the next row
    pub fn advance_row(&mut self) {
        self.grid.advance_row();
    }

    /// Append an unstyled single cell at the cursor; returns its coordinate
    pub fn append<V: Into<String>>(&mut self, value: V) -> XlsxResult<(u32, u16)> {
        self.append_cell(value, CellOptions::new())
    }

    /// Append a cell with explicit span/rowspan/style; returns its anchor
    pub fn append_cell<V: Into<String>>(
        &mut self,
        value: V,
        opts: CellOptions,
    ) -> XlsxResult<(u32, u16)> {
        let anchor = self.grid.append(value, opts)?;
        Ok(anchor)
    }

    /// Write a header row plus one body row per record.
    ///
    /// Starts on a fresh row. Headers take each column's base style with
    /// "bold" appended and set the column width when one is configured. Body
    /// cells read `column.key` from the record (an absent key is an error),
    /// format the value with the column's formatter or plain stringification,
    /// and combine the base style with any extra tokens from the column's
    /// conditional-style function.
    pub fn write_table(&mut self, columns: &[TableColumn], rows: &[Record]) -> XlsxResult<()> {
        self.advance_row();
        for column in columns {
            let header_style = if column.style.is_empty() {
                "bold".to_string()
            } else {
                format!("{} bold", column.style)
            };
            let (_, col) =
                self.append_cell(column.name.clone(), CellOptions::new().style(header_style))?;
            if let Some(width) = column.width {
                self.set_column_width(col, width)?;
            }
        }

        for row in rows {
            self.advance_row();
            for column in columns {
                let value = row
                    .get(&column.key)
                    .ok_or_else(|| Error::MissingField(column.key.clone()))?;
                let text = match &column.formatter {
                    Some(formatter) => formatter(value),
                    None => value.to_string(),
                };
                let style = match &column.style_fn {
                    Some(style_fn) => {
                        let extra = style_fn(value, row);
                        if extra.is_empty() {
                            column.style.clone()
                        } else if column.style.is_empty() {
                            extra
                        } else {
                            format!("{} {}", column.style, extra)
                        }
                    }
                    None => column.style.clone(),
                };
                self.append_cell(text, CellOptions::new().style(style))?;
            }
        }
        Ok(())
    }

    /// Render the buffered grid into a workbook.
    ///
    /// Consumes the writer. Cells flush in row-major order; merge anchors
    /// issue a backend merge over their full rectangle, covered coordinates
    /// are skipped. Formats are resolved once per distinct style string.
    pub fn render(self) -> XlsxResult<RenderedWorkbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, width) in self.grid.column_widths() {
            worksheet.set_column_width(col - 1, width)?;
        }

        let mut formats: HashMap<String, Format> = HashMap::new();
        let registry = &self.registry;

        for row in 1..=self.grid.max_row() {
            for col in 1..=self.grid.max_col() {
                let cell = match self.grid.slot(row, col) {
                    Some(Slot::Cell(cell)) => cell,
                    Some(Slot::Covered) | None => continue,
                };
                let (r, c) = (row - 1, col - 1);
                log::trace!("cell ({row},{col}) span={} rowspan={}", cell.span, cell.rowspan);
                if cell.is_merged() {
                    let last_row = r + (cell.rowspan - 1);
                    let last_col = c + (cell.span - 1);
                    let format = formats
                        .entry(cell.style.clone())
                        .or_insert_with(|| format_from_style(&registry.resolve(&cell.style)));
                    worksheet.merge_range(r, c, last_row, last_col, &cell.value, format)?;
                } else if cell.style.is_empty() {
                    worksheet.write_string(r, c, &cell.value)?;
                } else {
                    let format = formats
                        .entry(cell.style.clone())
                        .or_insert_with(|| format_from_style(&registry.resolve(&cell.style)));
                    worksheet.write_string_with_format(r, c, &cell.value, format)?;
                }
            }
        }

        log::debug!(
            "rendered {} cells ({} rows x {} cols, {} distinct formats)",
            self.grid.occupied(),
            self.grid.max_row(),
            self.grid.max_col(),
            formats.len()
        );

        let bytes = workbook.save_to_buffer()?;
        Ok(RenderedWorkbook {
            bytes,
            file_name: self.file_name,
        })
    }
}
