//! Sparse, cursor-driven cell grid
//!
//! Cells accumulate in a sparse coordinate map and are only flushed to a
//! spreadsheet backend in a final render pass. The buffering is what lets a
//! caller place a merged header before its body rows without caring about
//! the backend's write order.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A pending cell: display content plus its style string and merge extent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Display content, already stringified by the caller
    pub value: String,
    /// Space-separated style-class tokens (empty = unstyled)
    pub style: String,
    /// Horizontal merge width in cells (>= 1)
    pub span: u16,
    /// Vertical merge height in cells (>= 1)
    pub rowspan: u32,
}

impl GridCell {
    /// Check if this cell anchors a merged region
    pub fn is_merged(&self) -> bool {
        self.span > 1 || self.rowspan > 1
    }
}

/// Occupancy of one grid coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A written cell (plain, or the top-left anchor of a merged region)
    Cell(GridCell),
    /// Inside a merged region but not its anchor
    Covered,
}

/// Options for placing one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOptions {
    /// Horizontal merge width (default 1)
    pub span: u16,
    /// Vertical merge height (default 1)
    pub rowspan: u32,
    /// Style string (default empty)
    pub style: String,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            span: 1,
            rowspan: 1,
            style: String::new(),
        }
    }
}

impl CellOptions {
    /// Create default options: span 1, rowspan 1, no style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal merge width
    pub fn span(mut self, span: u16) -> Self {
        self.span = span;
        self
    }

    /// Set the vertical merge height
    pub fn rowspan(mut self, rowspan: u32) -> Self {
        self.rowspan = rowspan;
        self
    }

    /// Set the style string
    pub fn style<S: Into<String>>(mut self, style: S) -> Self {
        self.style = style.into();
        self
    }
}

/// Sparse cell grid with a row/column write cursor.
///
/// Rows and columns are 1-indexed. The cursor starts at (1, 1); appends
/// probe forward past occupied coordinates, so a rowspan reaching down from
/// an earlier row pushes later appends to the right instead of being
/// overwritten.
#[derive(Debug, Default)]
pub struct SheetGrid {
    /// Occupied coordinates
    slots: AHashMap<(u32, u16), Slot>,
    /// Buffered column widths (ordered for a deterministic flush)
    column_widths: BTreeMap<u16, f64>,
    /// Cursor row (1-indexed)
    cursor_row: u32,
    /// Cursor column (1-indexed)
    cursor_col: u16,
    /// High-water mark: maximum occupied row
    max_row: u32,
    /// High-water mark: maximum occupied column
    max_col: u16,
}

impl SheetGrid {
    /// Create an empty grid with the cursor at (1, 1)
    pub fn new() -> Self {
        Self {
            slots: AHashMap::new(),
            column_widths: BTreeMap::new(),
            cursor_row: 1,
            cursor_col: 1,
            max_row: 0,
            max_col: 0,
        }
    }

    /// Current cursor position `(row, col)`
    pub fn cursor(&self) -> (u32, u16) {
        (self.cursor_row, self.cursor_col)
    }

    /// Maximum occupied row (0 when nothing has been written)
    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    /// Maximum occupied column (0 when nothing has been written)
    pub fn max_col(&self) -> u16 {
        self.max_col
    }

    /// Number of occupied coordinates (merged regions count every covered cell)
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    /// Look up the occupancy of a coordinate
    pub fn slot(&self, row: u32, col: u16) -> Option<&Slot> {
        self.slots.get(&(row, col))
    }

    /// Look up the cell anchored at a coordinate, if any
    pub fn cell(&self, row: u32, col: u16) -> Option<&GridCell> {
        match self.slots.get(&(row, col)) {
            Some(Slot::Cell(cell)) => Some(cell),
            _ => None,
        }
    }

    /// Buffered column widths, in column order
    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(&col, &width)| (col, width))
    }

    /// Record a width for a 1-indexed column, applied at render
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        if col == 0 {
            return Err(Error::ColumnOutOfBounds(0, MAX_COLS));
        }
        self.column_widths.insert(col, width);
        Ok(())
    }

    /// Move the cursor to the start of the next row
    pub fn advance_row(&mut self) {
        self.cursor_row += 1;
        self.cursor_col = 1;
    }

    /// Place a cell at the next free column of the cursor row.
    ///
    /// Probes forward past occupied coordinates, records every coordinate of
    /// the rowspan x span rectangle as occupied, raises the high-water marks
    /// and advances the cursor column past the written span. Returns the
    /// anchor coordinate.
    pub fn append<V: Into<String>>(&mut self, value: V, opts: CellOptions) -> Result<(u32, u16)> {
        if opts.span == 0 {
            return Err(Error::InvalidSpan(opts.span));
        }
        if opts.rowspan == 0 {
            return Err(Error::InvalidRowSpan(opts.rowspan));
        }

        let row = self.cursor_row;
        let mut col = self.cursor_col;
        while self.slots.contains_key(&(row, col)) {
            col = col
                .checked_add(1)
                .ok_or(Error::ColumnOutOfBounds(u16::MAX as u32 + 1, MAX_COLS))?;
        }

        let last_col = col as u32 + opts.span as u32 - 1;
        if last_col > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(last_col, MAX_COLS));
        }
        let last_row = row
            .checked_add(opts.rowspan - 1)
            .filter(|&r| r <= MAX_ROWS)
            .ok_or(Error::RowOutOfBounds(row, MAX_ROWS))?;
        let last_col = last_col as u16;

        for r in row..=last_row {
            for c in col..=last_col {
                self.slots.insert((r, c), Slot::Covered);
            }
        }
        self.slots.insert(
            (row, col),
            Slot::Cell(GridCell {
                value: value.into(),
                style: opts.style,
                span: opts.span,
                rowspan: opts.rowspan,
            }),
        );

        self.max_row = self.max_row.max(last_row);
        self.max_col = self.max_col.max(last_col);
        self.cursor_col = last_col + 1;

        Ok((row, col))
    }
}
