use crate::buffer::TextBuffer;
use crate::edit::normalize_line_breaks;
use crate::selection::Selection;

/// Seconds between caret visibility toggles.
pub const BLINK_INTERVAL: f64 = 0.5;

/// Pixel scroll of the text relative to the padded interior. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

/// Caret blink phase. Times are host-clock seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorBlink {
    pub visible: bool,
    pub last_toggle: f64,
    pub interval: f64,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(BLINK_INTERVAL)
    }
}

impl CursorBlink {
    pub fn new(interval: f64) -> Self {
        Self {
            visible: true,
            last_toggle: 0.0,
            interval,
        }
    }

    /// Makes the caret visible and restarts the blink timer.
    pub fn reset(&mut self, now: f64) {
        self.visible = true;
        self.last_toggle = now;
    }

    /// Advances the blink phase for a frame drawn at `now`.
    pub fn tick(&mut self, now: f64, focused: bool) {
        if !focused {
            self.visible = false;
            return;
        }
        if now - self.last_toggle > self.interval {
            self.visible = !self.visible;
            self.last_toggle = now;
        }
    }
}

/// Everything one input instance knows about its text and interaction.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub buffer: TextBuffer,
    pub selection: Selection,
    pub scroll: ScrollOffset,
    pub focused: bool,
    pub blink: CursorBlink,
    pub dragging: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding `text` with the caret at the start.
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from(normalize_line_breaks(text).as_ref()),
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn caret(&self) -> usize {
        self.selection.caret()
    }

    pub fn selected_text(&self) -> Option<String> {
        if self.selection.is_collapsed() {
            return None;
        }
        let (start, end) = self.selection.range();
        self.buffer.slice(start, end).ok()
    }

    /// Replaces the whole buffer from outside (controlled value updates).
    /// The selection is clamped to the new length; nothing else changes.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = TextBuffer::from(normalize_line_breaks(text).as_ref());
        self.selection.clamp(self.buffer.len_chars());
    }

    pub fn focus(&mut self, now: f64) {
        self.focused = true;
        self.blink.reset(now);
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.dragging = false;
        self.blink.visible = false;
    }
}
