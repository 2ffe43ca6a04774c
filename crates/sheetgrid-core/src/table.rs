//! Table column schemas

use std::collections::HashMap;
use std::fmt;

use crate::value::CellValue;

/// One row of table input, keyed by field name
pub type Record = HashMap<String, CellValue>;

/// Formats a field value into display text
pub type Formatter = Box<dyn Fn(&CellValue) -> String>;

/// Produces extra style tokens from a field value and its record
pub type StyleFn = Box<dyn Fn(&CellValue, &Record) -> String>;

/// Column schema for table writing.
///
/// Describes where a body cell's value comes from (`key`), how the header
/// reads (`name`), and optional width, base style, display formatting, and
/// per-row conditional styling.
pub struct TableColumn {
    /// Field name to read from each record
    pub key: String,
    /// Header display name
    pub name: String,
    /// Column width in character units (None = backend default)
    pub width: Option<f64>,
    /// Base style string applied to every body cell (and, plus "bold", to the header)
    pub style: String,
    /// Optional value formatter; the default is plain stringification
    pub formatter: Option<Formatter>,
    /// Optional conditional-style function returning extra style tokens
    pub style_fn: Option<StyleFn>,
}

impl TableColumn {
    /// Create a column with default settings
    pub fn new<K: Into<String>, N: Into<String>>(key: K, name: N) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            width: None,
            style: String::new(),
            formatter: None,
            style_fn: None,
        }
    }

    /// Set the column width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the base style string
    pub fn with_style<S: Into<String>>(mut self, style: S) -> Self {
        self.style = style.into();
        self
    }

    /// Set a value formatter
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&CellValue) -> String + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Set a conditional-style function
    pub fn with_style_fn<F>(mut self, style_fn: F) -> Self
    where
        F: Fn(&CellValue, &Record) -> String + 'static,
    {
        self.style_fn = Some(Box::new(style_fn));
        self
    }
}

impl fmt::Debug for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("width", &self.width)
            .field("style", &self.style)
            .field("formatter", &self.formatter.is_some())
            .field("style_fn", &self.style_fn.is_some())
            .finish()
    }
}

/// Build a [`Record`] from `(key, value)` pairs
pub fn record<K, V, I>(fields: I) -> Record
where
    K: Into<String>,
    V: Into<CellValue>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
