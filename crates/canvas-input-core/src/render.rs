//! One drawing pass of an input onto an abstract [`Surface`].

use canvas_input_config::{BoxEdges, CssColor, InputOptions};

use crate::layout::{column_x, offset_to_pixel, LayoutMetrics, TextMeasure};
use crate::state::EditorState;
use crate::viewport::scroll_to_caret;

/// Inset of the text clip region from the outer edge, keeps the border clear.
pub const CLIP_INSET: f32 = 2.0;
/// Extra highlight width marking a selected line break.
pub const LINE_BREAK_STUB: f32 = 5.0;
pub const CARET_WIDTH: f32 = 1.0;
pub const BORDER_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn inset(&self, d: f32) -> Self {
        Self::new(
            self.x + d,
            self.y + d,
            (self.width - 2.0 * d).max(0.0),
            (self.height - 2.0 * d).max(0.0),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub family: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: 20.0,
            family: "Arial".to_string(),
        }
    }
}

/// A 2D drawing target. Coordinates are surface-local pixels; text is
/// drawn with its top edge at `y`.
pub trait Surface: TextMeasure {
    fn size(&self) -> (f32, f32);
    fn clear(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: CssColor);
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: CssColor);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: CssColor);
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    /// Selects the font used by `fill_text` and by measurement.
    fn set_font(&mut self, font: &FontSpec);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: CssColor);
}

/// Resolved colors, font and metrics for drawing one input.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub text_color: CssColor,
    pub background_color: CssColor,
    pub border_color: CssColor,
    pub focus_border_color: CssColor,
    pub selection_color: CssColor,
    pub placeholder_color: CssColor,
    pub placeholder: String,
    pub font: FontSpec,
    pub metrics: LayoutMetrics,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_options(&InputOptions::default(), None)
    }
}

impl RenderStyle {
    /// Resolves option strings. Padding defaults to 5 px on each axis.
    pub fn from_options(options: &InputOptions, padding: Option<BoxEdges>) -> Self {
        let mut metrics = LayoutMetrics::new(options.font_size);
        if let Some(p) = padding {
            metrics.padding_x = p.left;
            metrics.padding_y = p.top;
        }
        Self {
            text_color: options.text_color(),
            background_color: options.background_color(),
            border_color: options.border_color(),
            focus_border_color: options.focus_border_color(),
            selection_color: options.selection_color(),
            placeholder_color: CssColor::GRAY,
            placeholder: options.placeholder.clone(),
            font: FontSpec {
                size: options.font_size,
                family: options.font_family.clone(),
            },
            metrics,
        }
    }
}

/// Draws one frame of `state` and advances its blink phase.
///
/// Also clamps `state.scroll` so the caret stays visible even when the
/// surface was resized since the last edit.
pub fn render_frame(state: &mut EditorState, style: &RenderStyle, surface: &mut dyn Surface, now: f64) {
    state.blink.tick(now, state.focused);

    let (width, height) = surface.size();
    let bounds = Rect::new(0.0, 0.0, width, height);
    surface.clear(bounds);
    surface.fill_rect(bounds, style.background_color);
    let border = if state.focused {
        style.focus_border_color
    } else {
        style.border_color
    };
    surface.stroke_rect(bounds, BORDER_WIDTH, border);
    surface.set_font(&style.font);

    let metrics = &style.metrics;
    let line_height = metrics.line_height();
    let caret = offset_to_pixel(&state.buffer, &*surface, state.caret());
    let (visible_width, visible_height) = metrics.visible_size(width, height);
    scroll_to_caret(&mut state.scroll, &caret, line_height, visible_width, visible_height);

    surface.push_clip(bounds.inset(CLIP_INSET));

    let (sel_start, sel_end) = state.selection.range();
    let show_placeholder = state.buffer.is_empty() && !style.placeholder.is_empty();
    let line_x = metrics.padding_x - state.scroll.x;
    let top = metrics.padding_y - state.scroll.y;
    let mut line_start = 0;

    for line_idx in 0..state.buffer.len_lines() {
        let text = state.buffer.line_text(line_idx).unwrap_or_default();
        let line_len = text.chars().count();
        let line_end = line_start + line_len;
        let line_y = top + line_idx as f32 * line_height;

        if line_y + line_height >= 0.0 && line_y <= height {
            if sel_start < line_end && sel_end > line_start {
                let local_start = sel_start.saturating_sub(line_start);
                let local_end = (sel_end - line_start).min(line_len);
                let start_x = column_x(&*surface, &text, local_start);
                let sel_x = line_x + start_x;
                let mut sel_w = column_x(&*surface, &text, local_end) - start_x;
                if sel_end > line_end && local_end == line_len {
                    sel_w += LINE_BREAK_STUB;
                }
                if sel_w > 0.0 {
                    surface.fill_rect(
                        Rect::new(sel_x, line_y, sel_w, line_height),
                        style.selection_color,
                    );
                }
            }

            if show_placeholder && line_idx == 0 {
                surface.fill_text(&style.placeholder, line_x, line_y, style.placeholder_color);
            } else if !text.is_empty() {
                surface.fill_text(&text, line_x, line_y, style.text_color);
            }
        }

        line_start = line_end + 1;
    }

    if state.focused && state.blink.visible {
        let x = line_x + caret.x;
        let y = top + caret.line as f32 * line_height;
        surface.stroke_line((x, y), (x, y + line_height), CARET_WIDTH, style.text_color);
    }

    surface.pop_clip();
}
