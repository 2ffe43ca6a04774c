//! Conversion from the core style model to backend formats

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, FormatPattern, FormatUnderline};

use sheetgrid_core::{
    BorderLineStyle, Color, FillStyle, HorizontalAlignment, PatternType, Style, Underline,
    VerticalAlignment,
};

/// Build a backend [`Format`] from a resolved attribute group.
///
/// Unset fields are simply not applied, leaving the backend defaults.
pub(crate) fn format_from_style(style: &Style) -> Format {
    let mut format = Format::new();

    // Font
    if let Some(name) = &style.font.name {
        format = format.set_font_name(name);
    }
    if let Some(size) = style.font.size {
        format = format.set_font_size(size);
    }
    if style.font.bold == Some(true) {
        format = format.set_bold();
    }
    if style.font.italic == Some(true) {
        format = format.set_italic();
    }
    if let Some(underline) = style.font.underline {
        format = format.set_underline(map_underline(underline));
    }
    if style.font.strikethrough == Some(true) {
        format = format.set_font_strikethrough();
    }
    if let Some(color) = style.font.color {
        format = format.set_font_color(map_color(color));
    }

    // Fill
    format = apply_fill(format, &style.fill);

    // Border
    if let Some(edge) = &style.border.left {
        format = format
            .set_border_left(map_border(edge.style))
            .set_border_left_color(map_color(edge.color));
    }
    if let Some(edge) = &style.border.right {
        format = format
            .set_border_right(map_border(edge.style))
            .set_border_right_color(map_color(edge.color));
    }
    if let Some(edge) = &style.border.top {
        format = format
            .set_border_top(map_border(edge.style))
            .set_border_top_color(map_color(edge.color));
    }
    if let Some(edge) = &style.border.bottom {
        format = format
            .set_border_bottom(map_border(edge.style))
            .set_border_bottom_color(map_color(edge.color));
    }

    // Alignment
    if let Some(align) = style.alignment.horizontal {
        format = format.set_align(map_h_align(align));
    }
    if let Some(align) = style.alignment.vertical {
        format = format.set_align(map_v_align(align));
    }
    if style.alignment.wrap_text == Some(true) {
        format = format.set_text_wrap();
    }

    // Number format
    if let Some(number_format) = &style.number_format {
        format = format.set_num_format(number_format.format_string());
    }

    format
}

fn apply_fill(format: Format, fill: &FillStyle) -> Format {
    if fill.is_empty() {
        return format;
    }
    match fill.pattern {
        // Solid (or unspecified) pattern: the foreground is the fill color
        None | Some(PatternType::Solid) => match fill.foreground.or(fill.background) {
            Some(color) => format.set_background_color(map_color(color)),
            None => format,
        },
        Some(pattern) => {
            let mut format = format.set_pattern(map_pattern(pattern));
            if let Some(color) = fill.foreground {
                format = format.set_foreground_color(map_color(color));
            }
            if let Some(color) = fill.background {
                format = format.set_background_color(map_color(color));
            }
            format
        }
    }
}

fn map_color(color: Color) -> rust_xlsxwriter::Color {
    rust_xlsxwriter::Color::RGB(color.to_rgb_u32())
}

fn map_underline(underline: Underline) -> FormatUnderline {
    match underline {
        Underline::Single => FormatUnderline::Single,
        Underline::Double => FormatUnderline::Double,
    }
}

fn map_border(style: BorderLineStyle) -> FormatBorder {
    match style {
        BorderLineStyle::Thin => FormatBorder::Thin,
        BorderLineStyle::Medium => FormatBorder::Medium,
        BorderLineStyle::Thick => FormatBorder::Thick,
        BorderLineStyle::Dashed => FormatBorder::Dashed,
        BorderLineStyle::Dotted => FormatBorder::Dotted,
        BorderLineStyle::Double => FormatBorder::Double,
        BorderLineStyle::Hair => FormatBorder::Hair,
    }
}

fn map_pattern(pattern: PatternType) -> FormatPattern {
    match pattern {
        PatternType::Solid => FormatPattern::Solid,
        PatternType::LightGray => FormatPattern::LightGray,
        PatternType::MediumGray => FormatPattern::MediumGray,
        PatternType::DarkGray => FormatPattern::DarkGray,
    }
}

fn map_h_align(align: HorizontalAlignment) -> FormatAlign {
    match align {
        HorizontalAlignment::General => FormatAlign::General,
        HorizontalAlignment::Left => FormatAlign::Left,
        HorizontalAlignment::Center => FormatAlign::Center,
        HorizontalAlignment::Right => FormatAlign::Right,
        HorizontalAlignment::Fill => FormatAlign::Fill,
        HorizontalAlignment::Justify => FormatAlign::Justify,
    }
}

fn map_v_align(align: VerticalAlignment) -> FormatAlign {
    match align {
        VerticalAlignment::Top => FormatAlign::Top,
        VerticalAlignment::Center => FormatAlign::VerticalCenter,
        VerticalAlignment::Bottom => FormatAlign::Bottom,
    }
}
