//! Font style types

use super::Color;

/// Partial font settings
///
/// Unset fields leave the backend's font defaults untouched, which is what
/// lets "bold" and "red" compose into one font.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontStyle {
    /// Font family name (e.g., "Calibri", "Arial")
    pub name: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Underline style
    pub underline: Option<Underline>,
    /// Strikethrough
    pub strikethrough: Option<bool>,
    /// Font color
    pub color: Option<Color>,
}

impl FontStyle {
    /// Create a new empty font group
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another font group into this one; `other`'s set fields win
    pub fn merge_from(&mut self, other: &FontStyle) {
        if other.name.is_some() {
            self.name = other.name.clone();
        }
        if other.size.is_some() {
            self.size = other.size;
        }
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        if other.italic.is_some() {
            self.italic = other.italic;
        }
        if other.underline.is_some() {
            self.underline = other.underline;
        }
        if other.strikethrough.is_some() {
            self.strikethrough = other.strikethrough;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }

    /// Check if no font field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.strikethrough.is_none()
            && self.color.is_none()
    }
}


/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    /// Single underline
    #[default]
    Single,
    /// Double underline
    Double,
}
