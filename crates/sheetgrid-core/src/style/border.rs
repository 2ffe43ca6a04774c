//! Border style types

use super::Color;

/// Partial border settings for a cell
///
/// Each edge is independent, so a class that only sets `bottom` layers
/// cleanly over one that set all four edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// Create a new border group with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all borders to the same style
    pub fn all(style: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge::new(style, color));
        Self {
            left: edge.clone(),
            right: edge.clone(),
            top: edge.clone(),
            bottom: edge,
        }
    }

    /// Set the left border
    pub fn with_left(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.left = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the right border
    pub fn with_right(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.right = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the top border
    pub fn with_top(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.top = Some(BorderEdge::new(style, color));
        self
    }

    /// Set the bottom border
    pub fn with_bottom(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.bottom = Some(BorderEdge::new(style, color));
        self
    }

    /// Merge another border group into this one; `other`'s set edges win
    pub fn merge_from(&mut self, other: &BorderStyle) {
        if other.left.is_some() {
            self.left = other.left.clone();
        }
        if other.right.is_some() {
            self.right = other.right.clone();
        }
        if other.top.is_some() {
            self.top = other.top.clone();
        }
        if other.bottom.is_some() {
            self.bottom = other.bottom.clone();
        }
    }

    /// Check if all borders are unset
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_sets_four_edges() {
        let border = BorderStyle::all(BorderLineStyle::Thin, Color::BLACK);
        let edge = BorderEdge::new(BorderLineStyle::Thin, Color::BLACK);
        assert_eq!(border.left, Some(edge.clone()));
        assert_eq!(border.right, Some(edge.clone()));
        assert_eq!(border.top, Some(edge.clone()));
        assert_eq!(border.bottom, Some(edge));
    }

    #[test]
    fn test_per_edge_builders() {
        let border = BorderStyle::new()
            .with_left(BorderLineStyle::Thin, Color::BLACK)
            .with_right(BorderLineStyle::Thin, Color::BLACK)
            .with_top(BorderLineStyle::Medium, Color::BLACK)
            .with_bottom(BorderLineStyle::Double, Color::BLACK);
        assert_eq!(border.top.unwrap().style, BorderLineStyle::Medium);
        assert_eq!(border.bottom.unwrap().style, BorderLineStyle::Double);
        assert!(!BorderStyle::new().with_left(BorderLineStyle::Hair, Color::BLACK).is_empty());
    }

    #[test]
    fn test_merge_layers_single_edge_over_all() {
        let mut base = BorderStyle::all(BorderLineStyle::Thin, Color::BLACK);
        let layer = BorderStyle::new().with_bottom(BorderLineStyle::Thick, Color::RED);
        base.merge_from(&layer);

        // Only the edge the layer sets changes
        assert_eq!(base.bottom.unwrap().style, BorderLineStyle::Thick);
        assert_eq!(base.top.unwrap().style, BorderLineStyle::Thin);
        assert_eq!(base.left.unwrap().style, BorderLineStyle::Thin);
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    /// Thin line
    #[default]
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
    /// Hair line (very thin)
    Hair,
}
