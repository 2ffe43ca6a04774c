//! Fill/background style types

use super::Color;

/// Partial fill settings for a cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FillStyle {
    /// Fill pattern
    pub pattern: Option<PatternType>,
    /// Foreground (pattern) color; for solid fills this is the fill color
    pub foreground: Option<Color>,
    /// Background color behind the pattern
    pub background: Option<Color>,
}

impl FillStyle {
    /// Create a new empty fill group
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle {
            pattern: Some(PatternType::Solid),
            foreground: Some(color),
            background: None,
        }
    }

    /// Merge another fill group into this one; `other`'s set fields win
    pub fn merge_from(&mut self, other: &FillStyle) {
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        if other.foreground.is_some() {
            self.foreground = other.foreground;
        }
        if other.background.is_some() {
            self.background = other.background;
        }
    }

    /// Check if no fill field is set
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none() && self.foreground.is_none() && self.background.is_none()
    }
}


/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// Solid (100% foreground)
    #[default]
    Solid,
    /// 25% gray
    LightGray,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
}
