//! `Surface` and `TextMeasure` implemented over an egui painter.

use std::cell::RefCell;
use std::collections::HashMap;

use canvas_input_config::CssColor;
use canvas_input_core::{FontSpec, Rect, Surface, TextMeasure};
use egui::text::LayoutJob;
use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};

use crate::theme::{font_id, to_color32};

/// Per-glyph advance widths for one font, measured through egui's fonts.
pub struct GlyphCache {
    ctx: egui::Context,
    font_id: FontId,
    widths: RefCell<HashMap<char, f32>>,
}

impl GlyphCache {
    pub fn new(ctx: &egui::Context, font: &FontSpec) -> Self {
        Self {
            ctx: ctx.clone(),
            font_id: font_id(font),
            widths: RefCell::new(HashMap::new()),
        }
    }

    pub fn font_id(&self) -> &FontId {
        &self.font_id
    }

    /// Switches font, dropping cached widths if it actually changed.
    pub fn set_font(&mut self, font: &FontSpec) {
        let id = font_id(font);
        if id != self.font_id {
            self.font_id = id;
            self.widths.get_mut().clear();
        }
    }

    fn measure(&self, ch: char) -> f32 {
        let job = LayoutJob::simple_singleline(ch.to_string(), self.font_id.clone(), Color32::WHITE);
        self.ctx.fonts_mut(|f| f.layout_job(job)).rect.width()
    }
}

impl TextMeasure for GlyphCache {
    fn char_width(&self, ch: char) -> f32 {
        let cached = self.widths.borrow().get(&ch).copied();
        if let Some(width) = cached {
            return width;
        }
        let width = self.measure(ch);
        self.widths.borrow_mut().insert(ch, width);
        width
    }
}

/// Draws into a screen rectangle; surface coordinates are relative to its
/// top-left corner.
pub struct EguiSurface<'a> {
    painter: Painter,
    saved: Vec<Painter>,
    rect: egui::Rect,
    glyphs: &'a mut GlyphCache,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: Painter, rect: egui::Rect, glyphs: &'a mut GlyphCache) -> Self {
        Self {
            painter,
            saved: Vec::new(),
            rect,
            glyphs,
        }
    }

    fn pos(&self, x: f32, y: f32) -> Pos2 {
        self.rect.min + egui::vec2(x, y)
    }

    fn screen_rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_size(self.pos(rect.x, rect.y), egui::vec2(rect.width, rect.height))
    }
}

impl TextMeasure for EguiSurface<'_> {
    fn char_width(&self, ch: char) -> f32 {
        self.glyphs.char_width(ch)
    }
}

impl Surface for EguiSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.rect.width(), self.rect.height())
    }

    fn clear(&mut self, _rect: Rect) {
        // egui rebuilds its shape list every frame
    }

    fn fill_rect(&mut self, rect: Rect, color: CssColor) {
        let r = self.screen_rect(rect);
        self.painter.rect_filled(r, 0.0, to_color32(color));
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: CssColor) {
        // stroke inside the rect so the outermost pixels stay visible
        let r = self.screen_rect(rect).shrink(width / 2.0);
        let stroke = Stroke::new(width, to_color32(color));
        let corners = [r.left_top(), r.right_top(), r.right_bottom(), r.left_bottom()];
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            self.painter.line_segment([corners[i], next], stroke);
        }
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: CssColor) {
        let stroke = Stroke::new(width, to_color32(color));
        self.painter
            .line_segment([self.pos(from.0, from.1), self.pos(to.0, to.1)], stroke);
    }

    fn push_clip(&mut self, rect: Rect) {
        let clipped = self.painter.with_clip_rect(self.screen_rect(rect));
        self.saved.push(std::mem::replace(&mut self.painter, clipped));
    }

    fn pop_clip(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.painter = previous;
        }
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.glyphs.set_font(font);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: CssColor) {
        let font = self.glyphs.font_id().clone();
        self.painter
            .text(self.pos(x, y), Align2::LEFT_TOP, text, font, to_color32(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_context() -> egui::Context {
        let ctx = egui::Context::default();
        // fonts are only available after the first pass
        let _ = ctx.run(egui::RawInput::default(), |_| {});
        ctx
    }

    #[test]
    fn test_glyph_widths_are_positive_and_cached() {
        let ctx = ready_context();
        let cache = GlyphCache::new(&ctx, &FontSpec::default());
        let w = cache.char_width('W');
        assert!(w > 0.0);
        assert_eq!(cache.char_width('W'), w);
        assert_eq!(cache.widths.borrow().len(), 1);
        assert!(cache.text_width("WW") > w);
    }

    #[test]
    fn test_set_font_invalidates_on_change_only() {
        let ctx = ready_context();
        let mut cache = GlyphCache::new(&ctx, &FontSpec::default());
        cache.char_width('a');
        cache.set_font(&FontSpec::default());
        assert_eq!(cache.widths.borrow().len(), 1);
        cache.set_font(&FontSpec {
            size: 32.0,
            family: "Arial".to_string(),
        });
        assert!(cache.widths.borrow().is_empty());
    }

    #[test]
    fn test_clip_stack_restores_painter() {
        let ctx = ready_context();
        let mut cache = GlyphCache::new(&ctx, &FontSpec::default());
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(100.0, 40.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        let mut surface = EguiSurface::new(painter, rect, &mut cache);

        assert_eq!(surface.size(), (100.0, 40.0));
        surface.push_clip(Rect::new(2.0, 2.0, 96.0, 36.0));
        assert_eq!(surface.painter.clip_rect().min, egui::pos2(12.0, 12.0));
        surface.pop_clip();
        assert_eq!(surface.painter.clip_rect(), rect);
        surface.pop_clip();
        assert_eq!(surface.painter.clip_rect(), rect);
    }
}
