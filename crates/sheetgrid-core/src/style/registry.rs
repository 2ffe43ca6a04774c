//! Ordered style-class registry and resolver

use ahash::AHashSet;

use super::{BorderLineStyle, Color, HorizontalAlignment, Style};

/// Ordered mapping from style-class name to attribute group.
///
/// Resolution order is definition order: when two classes in a style string
/// set the same attribute, the later-registered class wins. The registry is
/// built once and passed into the writer; it is not mutated while writing.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    classes: Vec<(String, Style)>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the stock class table.
    ///
    /// Colors follow the conventional Excel "bad/neutral/good" palette.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "red",
            Style::new()
                .font_color(Color::argb(0xFF, 0x9C, 0x00, 0x06))
                .fill_color(Color::argb(0xFF, 0xFF, 0xC7, 0xCE)),
        );
        registry.register(
            "yellow",
            Style::new()
                .font_color(Color::argb(0xFF, 0x9C, 0x65, 0x00))
                .fill_color(Color::argb(0xFF, 0xFF, 0xEB, 0x9C)),
        );
        registry.register(
            "green",
            Style::new()
                .font_color(Color::argb(0xFF, 0x00, 0x61, 0x00))
                .fill_color(Color::argb(0xFF, 0xC6, 0xEF, 0xCE)),
        );
        registry.register("clear", Style::new().fill_color(Color::WHITE));
        registry.register("bold", Style::new().bold(true));
        registry.register("italic", Style::new().italic(true));
        registry.register("underline", Style::new().underline(super::Underline::Single));
        registry.register(
            "center",
            Style::new().horizontal_alignment(HorizontalAlignment::Center),
        );
        registry.register(
            "right",
            Style::new().horizontal_alignment(HorizontalAlignment::Right),
        );
        registry.register(
            "left",
            Style::new().horizontal_alignment(HorizontalAlignment::Left),
        );
        registry.register(
            "celled",
            Style::new().border_all(BorderLineStyle::Thin, Color::BLACK),
        );
        registry
    }

    /// Register a class.
    ///
    /// Re-registering an existing name replaces its attribute group in
    /// place, keeping its original position in the resolution order.
    pub fn register<S: Into<String>>(&mut self, name: S, style: Style) {
        let name = name.into();
        match self.classes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = style,
            None => self.classes.push((name, style)),
        }
    }

    /// Get a class's attribute group by name
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.classes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry has no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Resolve a space-separated style string into one merged attribute group.
    ///
    /// The string is split on whitespace into discrete tokens and each token
    /// must equal a class name exactly, so "boldface" never picks up "bold".
    /// Matching classes merge in registration order; tokens that name no
    /// class are ignored.
    pub fn resolve(&self, spec: &str) -> Style {
        let tokens: AHashSet<&str> = spec.split_whitespace().collect();
        let mut merged = Style::new();
        if tokens.is_empty() {
            return merged;
        }
        for (name, style) in &self.classes {
            if tokens.contains(name.as_str()) {
                merged.merge_from(style);
            }
        }
        merged
    }
}
