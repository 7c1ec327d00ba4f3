//! Conversions from resolved input styling to egui types.

use canvas_input_config::CssColor;
use canvas_input_core::FontSpec;
use egui::{Color32, FontFamily, FontId};

/// Converts a `CssColor` (straight alpha) to egui `Color32`.
pub fn to_color32(c: CssColor) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Maps a CSS-style family name onto the families egui ships with.
///
/// Monospace-looking names go to `FontFamily::Monospace`; everything else
/// renders with the proportional font.
pub fn font_id(font: &FontSpec) -> FontId {
    let family = font.family.to_ascii_lowercase();
    let family = if family.contains("mono") || family.contains("courier") || family.contains("consol") {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    };
    FontId::new(font.size, family)
}
