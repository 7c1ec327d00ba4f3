//! Test doubles shared by the unit tests.

use canvas_input_config::CssColor;

use crate::clipboard::ClipboardService;
use crate::layout::TextMeasure;
use crate::render::{FontSpec, Rect, Surface};

/// Every glyph is the same width.
pub struct FixedMeasure(pub f32);

impl TextMeasure for FixedMeasure {
    fn char_width(&self, _ch: char) -> f32 {
        self.0
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: String,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn with(contents: &str) -> Self {
        Self {
            contents: contents.to_string(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            contents: String::new(),
            fail: true,
        }
    }
}

impl ClipboardService for MemoryClipboard {
    fn read_text(&mut self) -> anyhow::Result<String> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.contents = text.to_string();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    Fill { rect: Rect, color: CssColor },
    Stroke { rect: Rect, color: CssColor },
    Line { from: (f32, f32), to: (f32, f32), color: CssColor },
    PushClip(Rect),
    PopClip,
    Text { text: String, x: f32, y: f32, color: CssColor },
}

/// Records draw calls in order; glyphs are `char_width` wide.
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub char_width: f32,
    pub font: Option<FontSpec>,
    pub ops: Vec<DrawOp>,
    pub clip_depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32, char_width: f32) -> Self {
        Self {
            width,
            height,
            char_width,
            font: None,
            ops: Vec::new(),
            clip_depth: 0,
        }
    }
}

impl TextMeasure for RecordingSurface {
    fn char_width(&self, _ch: char) -> f32 {
        self.char_width
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: CssColor) {
        self.ops.push(DrawOp::Fill { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, _width: f32, color: CssColor) {
        self.ops.push(DrawOp::Stroke { rect, color });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), _width: f32, color: CssColor) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.ops.push(DrawOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth -= 1;
        self.ops.push(DrawOp::PopClip);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = Some(font.clone());
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: CssColor) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }
}
