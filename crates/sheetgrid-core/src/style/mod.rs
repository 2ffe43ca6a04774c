//! Cell styling types
//!
//! This module contains the partial-style model used by the class registry:
//! - [`Style`] - one attribute group (font/fill/border/alignment/number format)
//! - [`FontStyle`], [`FillStyle`], [`BorderStyle`], [`Alignment`] - the
//!   dict-valued categories, merged field-by-field
//! - [`NumberFormat`] - the scalar-valued category, replaced outright
//! - [`StyleRegistry`] - ordered name -> attribute-group table

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod registry;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::{FontStyle, Underline};
pub use number_format::NumberFormat;
pub use registry::StyleRegistry;

/// One attribute group: everything a style class may set on a cell.
///
/// All fields are partial. A class only pins the attributes it names, so
/// groups from several classes can be layered with [`Style::merge_from`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Border settings
    pub border: BorderStyle,
    /// Text alignment
    pub alignment: Alignment,
    /// Number format (scalar category: replaced, never merged)
    pub number_format: Option<NumberFormat>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another attribute group into this one.
    ///
    /// The dict-valued categories (font, fill, border, alignment) merge
    /// field-by-field with `other`'s set fields winning; the number format
    /// is replaced outright when `other` carries one.
    pub fn merge_from(&mut self, other: &Style) {
        self.font.merge_from(&other.font);
        self.fill.merge_from(&other.fill);
        self.border.merge_from(&other.border);
        self.alignment.merge_from(&other.alignment);
        if other.number_format.is_some() {
            self.number_format = other.number_format.clone();
        }
    }

    /// Check if no attribute is set in any category
    pub fn is_empty(&self) -> bool {
        self.font.is_empty()
            && self.fill.is_empty()
            && self.border.is_empty()
            && self.alignment.is_empty()
            && self.number_format.is_none()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = Some(bold);
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = Some(italic);
        self
    }

    /// Set the underline style
    pub fn underline(mut self, underline: Underline) -> Self {
        self.font.underline = Some(underline);
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = Some(size);
        self
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font.name = Some(name.into());
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = Some(color);
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Set all four borders to the same edge style
    pub fn border_all(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.border = BorderStyle::all(style, color);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = Some(wrap);
        self
    }

    /// Set the number format (a format string or a [`NumberFormat`])
    pub fn number_format<F: Into<NumberFormat>>(mut self, format: F) -> Self {
        self.number_format = Some(format.into());
        self
    }
}
