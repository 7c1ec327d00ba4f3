//! Pixel ↔ offset mapping for monospace-agnostic, unwrapped text.
//!
//! Lines are laid out top to bottom at `line_height` intervals starting at
//! the padded origin; glyphs advance by their measured width.

use crate::buffer::TextBuffer;
use crate::state::ScrollOffset;

pub const LINE_HEIGHT_FACTOR: f32 = 1.2;
pub const DEFAULT_PADDING: f32 = 5.0;

/// Glyph measurement for the active font.
pub trait TextMeasure {
    fn char_width(&self, ch: char) -> f32;

    fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_width(ch)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub font_size: f32,
    pub padding_x: f32,
    pub padding_y: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl LayoutMetrics {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            padding_x: DEFAULT_PADDING,
            padding_y: DEFAULT_PADDING,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT_FACTOR
    }

    /// Interior size left for text inside a surface of the given size.
    pub fn visible_size(&self, width: f32, height: f32) -> (f32, f32) {
        (
            (width - 2.0 * self.padding_x).max(0.0),
            (height - 2.0 * self.padding_y).max(0.0),
        )
    }
}

/// Where the caret lands on screen for a given offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPoint {
    pub line: usize,
    pub column: usize,
    /// Unscrolled distance from the line start in pixels.
    pub x: f32,
}

/// Line and column owning `offset`. Offsets past the end land on the end
/// of the last line.
pub fn line_col(buffer: &TextBuffer, offset: usize) -> (usize, usize) {
    let offset = offset.min(buffer.len_chars());
    let line = buffer.char_to_line(offset).unwrap_or(0);
    let start = buffer.line_to_char(line).unwrap_or(0);
    (line, offset - start)
}

/// Width of the first `column` glyphs of `line`.
pub fn column_x<M: TextMeasure + ?Sized>(measure: &M, line: &str, column: usize) -> f32 {
    line.chars().take(column).map(|ch| measure.char_width(ch)).sum()
}

/// Column in `line` nearest to `rel_x` pixels from the line start.
///
/// Walks glyphs left to right and stops at the first one whose midpoint is
/// at or beyond `rel_x`; past the last glyph yields the line length.
pub fn x_to_column<M: TextMeasure + ?Sized>(measure: &M, line: &str, rel_x: f32) -> usize {
    let mut acc = 0.0;
    let mut column = 0;
    for ch in line.chars() {
        let w = measure.char_width(ch);
        if acc + w / 2.0 >= rel_x {
            return column;
        }
        acc += w;
        column += 1;
    }
    column
}

pub fn offset_to_pixel<M: TextMeasure + ?Sized>(
    buffer: &TextBuffer,
    measure: &M,
    offset: usize,
) -> CaretPoint {
    let (line, column) = line_col(buffer, offset);
    let text = buffer.line_text(line).unwrap_or_default();
    CaretPoint {
        line,
        column,
        x: column_x(measure, &text, column),
    }
}

/// Maps a surface-local point to the nearest char offset.
pub fn pixel_to_offset<M: TextMeasure + ?Sized>(
    buffer: &TextBuffer,
    measure: &M,
    metrics: &LayoutMetrics,
    scroll: ScrollOffset,
    x: f32,
    y: f32,
) -> usize {
    let rel_x = x - metrics.padding_x + scroll.x;
    let rel_y = y - metrics.padding_y + scroll.y;

    let last_line = buffer.len_lines().saturating_sub(1);
    let raw = (rel_y / metrics.line_height()).floor();
    let line = if raw.is_nan() || raw < 0.0 {
        0
    } else {
        (raw as usize).min(last_line)
    };

    let text = buffer.line_text(line).unwrap_or_default();
    let start = buffer.line_to_char(line).unwrap_or(0);
    start + x_to_column(measure, &text, rel_x)
}
