//! A complete input: editor state, mode, style and value ownership.
//!
//! Hosts feed events in and draw through a [`RenderLoop`]; every edit is
//! reported through the [`ValueSource`] and every caret move scrolls the
//! caret into view.

use crate::clipboard::ClipboardCompletion;
use crate::controller::{self, EditOptions, KeyResponse};
use crate::edit::sanitize_incoming;
use crate::frame::{FrameOutcome, FrameScheduler, RenderLoop};
use crate::input::{KeyEvent, PointerEvent};
use crate::layout::{offset_to_pixel, TextMeasure};
use crate::render::{RenderStyle, Surface};
use crate::selection::Selection;
use crate::state::{CursorBlink, EditorState};
use crate::value::ValueSource;
use crate::viewport::scroll_to_caret;

#[derive(Debug)]
pub struct TextInput {
    state: EditorState,
    options: EditOptions,
    style: RenderStyle,
    value: ValueSource,
    size: (f32, f32),
}

impl TextInput {
    pub fn new(initial: &str, style: RenderStyle, options: EditOptions, value: ValueSource) -> Self {
        Self {
            state: EditorState::with_text(&sanitize_incoming(initial, options.multiline)),
            options,
            style,
            value,
            size: (400.0, 40.0),
        }
    }

    pub fn with_blink_interval(mut self, seconds: f64) -> Self {
        self.state.blink = CursorBlink::new(seconds);
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn text(&self) -> String {
        self.state.text()
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    /// Sets the selection, clamped to the buffer.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.state.selection = Selection::new(start, end);
        self.state.selection.clamp(self.state.buffer.len_chars());
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    pub fn options(&self) -> EditOptions {
        self.options
    }

    /// Switches line mode. Existing content is left as is.
    pub fn set_multiline(&mut self, multiline: bool) {
        self.options.multiline = multiline;
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Surface size used to keep the caret in view between frames.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = (width, height);
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    pub fn focus(&mut self, now: f64) {
        self.state.focus(now);
    }

    pub fn blur(&mut self) {
        self.state.blur();
    }

    /// Applies a value pushed from outside. Returns true if it was taken.
    pub fn set_value(&mut self, text: &str) -> bool {
        if !self.value.is_controlled() {
            tracing::debug!("Ignoring external value for an uncontrolled input");
            return false;
        }
        let text = sanitize_incoming(text, self.options.multiline);
        if self.state.buffer == &*text {
            return false;
        }
        self.state.set_text(&text);
        true
    }

    pub fn handle_key<M: TextMeasure + ?Sized>(
        &mut self,
        event: &KeyEvent,
        measure: &M,
        now: f64,
    ) -> KeyResponse {
        let response = controller::handle_key(&mut self.state, event, &self.options, now);
        if response == (KeyResponse::Consumed { edited: true }) {
            self.value.notify(&self.state.text());
        }
        if response.is_consumed() {
            self.reveal_caret(measure);
        }
        response
    }

    pub fn handle_pointer<M: TextMeasure + ?Sized>(
        &mut self,
        event: PointerEvent,
        measure: &M,
        now: f64,
    ) -> bool {
        let changed =
            controller::handle_pointer(&mut self.state, event, measure, &self.style.metrics, now);
        if changed {
            self.reveal_caret(measure);
        }
        changed
    }

    /// Applies a finished clipboard request. Returns true if the text changed.
    pub fn complete_clipboard<M: TextMeasure + ?Sized>(
        &mut self,
        completion: ClipboardCompletion,
        measure: &M,
        now: f64,
    ) -> bool {
        let edited = controller::complete_clipboard(&mut self.state, completion, &self.options, now);
        self.after_edit(edited, measure);
        edited
    }

    /// Pastes text the host already read from the clipboard over the
    /// current selection.
    pub fn paste_text<M: TextMeasure + ?Sized>(&mut self, text: &str, measure: &M, now: f64) -> bool {
        if !self.state.focused {
            return false;
        }
        let range = self.state.selection.range();
        let edited =
            controller::complete_paste(&mut self.state, range, Ok(text.to_string()), &self.options, now);
        self.after_edit(edited, measure);
        edited
    }

    /// Runs one tick of `render_loop` against this input.
    pub fn draw<S: FrameScheduler>(
        &mut self,
        render_loop: &mut RenderLoop<S>,
        surface: Option<&mut dyn Surface>,
        now: f64,
    ) -> FrameOutcome {
        render_loop.tick(&mut self.state, &self.style, surface, now)
    }

    fn after_edit<M: TextMeasure + ?Sized>(&mut self, edited: bool, measure: &M) {
        if edited {
            self.value.notify(&self.state.text());
            self.reveal_caret(measure);
        }
    }

    fn reveal_caret<M: TextMeasure + ?Sized>(&mut self, measure: &M) {
        let metrics = &self.style.metrics;
        let caret = offset_to_pixel(&self.state.buffer, measure, self.state.caret());
        let (width, height) = metrics.visible_size(self.size.0, self.size.1);
        scroll_to_caret(&mut self.state.scroll, &caret, metrics.line_height(), width, height);
    }
}
