//! The egui widget: allocates the input's rectangle, routes egui events
//! into the engine, applies clipboard completions and draws one frame.

use std::time::Duration;

use canvas_input_config::{BoxEdges, InputConfig, InputOptions};
use canvas_input_core::{
    ClipboardRequest, EditOptions, FrameScheduler, KeyResponse, PointerEvent, RenderLoop,
    RenderStyle, Surface, TextInput, ValueSource,
};
use egui::{Pos2, Response, Sense, Ui};

use crate::attributes::AttributeObservers;
use crate::clipboard::ClipboardWorker;
use crate::events::{translate, HostEvent};
use crate::surface::{EguiSurface, GlyphCache};

/// Delay between frames while an input is mounted.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Schedules the next frame through egui's repaint requests.
pub struct RepaintScheduler(egui::Context);

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&self) {
        self.0.request_repaint_after(FRAME_INTERVAL);
    }
}

pub struct CanvasInput {
    name: String,
    id: egui::Id,
    input: TextInput,
    options: InputOptions,
    attributes: AttributeObservers,
    glyphs: Option<GlyphCache>,
    render_loop: Option<RenderLoop<RepaintScheduler>>,
    clipboard: Option<ClipboardWorker>,
    focus_request: Option<bool>,
    autofocus: bool,
    rect: Option<egui::Rect>,
}

impl CanvasInput {
    pub fn new(name: &str, config: &InputConfig, initial: &str, value: ValueSource) -> Self {
        let options = config.input.clone();
        let padding = config.padding();
        let style = RenderStyle::from_options(&options, Some(padding));
        let input = TextInput::new(
            initial,
            style,
            EditOptions {
                multiline: options.multiline,
            },
            value,
        )
        .with_blink_interval(config.blink_interval_secs());
        let attributes =
            AttributeObservers::new(options.width, options.height, padding, config.margin());
        Self {
            name: name.to_string(),
            id: egui::Id::new(("canvas-input", name)),
            input,
            options,
            attributes,
            glyphs: None,
            render_loop: None,
            clipboard: None,
            focus_request: None,
            autofocus: false,
            rect: None,
        }
    }

    /// Takes keyboard focus on the first frame.
    pub fn autofocus(mut self) -> Self {
        self.autofocus = true;
        self
    }

    /// Uses `worker` instead of spawning a system clipboard worker on the
    /// first copy, cut or paste.
    pub fn set_clipboard(&mut self, worker: ClipboardWorker) {
        self.clipboard = Some(worker);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> egui::Id {
        self.id
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    pub fn attributes(&self) -> &AttributeObservers {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeObservers {
        &mut self.attributes
    }

    pub fn text(&self) -> String {
        self.input.text()
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn is_mounted(&self) -> bool {
        self.render_loop.as_ref().is_some_and(RenderLoop::is_active)
    }

    /// Screen rectangle of the input as of the last frame, without margin.
    pub fn rect(&self) -> Option<egui::Rect> {
        self.rect
    }

    /// Frames drawn since mount.
    pub fn frames(&self) -> u64 {
        self.render_loop.as_ref().map_or(0, RenderLoop::frames)
    }

    /// Requests focus; applied on the next frame.
    pub fn focus(&mut self) {
        self.focus_request = Some(true);
    }

    /// Gives up focus; applied on the next frame.
    pub fn blur(&mut self) {
        self.focus_request = Some(false);
    }

    /// Pushes an external value. Only controlled inputs accept it.
    pub fn set_value(&mut self, text: &str) -> bool {
        self.input.set_value(text)
    }

    pub fn set_width(&mut self, width: f32) -> bool {
        self.attributes.width.set(width.max(1.0))
    }

    pub fn set_height(&mut self, height: f32) -> bool {
        self.attributes.height.set(height.max(1.0))
    }

    pub fn set_padding(&mut self, spec: &str) -> bool {
        let changed = self.attributes.set_padding(spec);
        if changed {
            self.restyle();
        }
        changed
    }

    pub fn set_margin(&mut self, spec: &str) -> bool {
        self.attributes.set_margin(spec)
    }

    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.options.placeholder = placeholder.to_string();
        self.restyle();
    }

    pub fn set_multiline(&mut self, multiline: bool) {
        self.options.multiline = multiline;
        self.input.set_multiline(multiline);
    }

    /// Replaces all styling options, keeping the current text.
    pub fn set_options(&mut self, mut options: InputOptions) {
        options.sanitize();
        self.attributes.width.set(options.width);
        self.attributes.height.set(options.height);
        self.input.set_multiline(options.multiline);
        self.options = options;
        self.restyle();
    }

    /// Stops the render loop and the clipboard worker.
    pub fn unmount(&mut self) {
        if let Some(mut render_loop) = self.render_loop.take() {
            render_loop.cancel();
        }
        self.clipboard = None;
        self.glyphs = None;
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let ctx = ui.ctx().clone();
        let now = ui.input(|i| i.time);

        let width = *self.attributes.width.get();
        let height = *self.attributes.height.get();
        let margin: BoxEdges = *self.attributes.margin.get();
        let outer = egui::vec2(width + margin.horizontal(), height + margin.vertical());
        let (outer_rect, _) = ui.allocate_exact_size(outer, Sense::hover());
        let rect = egui::Rect::from_min_size(
            outer_rect.min + egui::vec2(margin.left, margin.top),
            egui::vec2(width, height),
        );
        let response = ui.interact(rect, self.id, Sense::click_and_drag());
        self.input.set_size(width, height);
        self.rect = Some(rect);

        if self.render_loop.is_none() {
            tracing::debug!("Mounting input '{}'", self.name);
            self.render_loop = Some(RenderLoop::start(RepaintScheduler(ctx.clone())));
        }
        let mut glyphs = self
            .glyphs
            .take()
            .unwrap_or_else(|| GlyphCache::new(&ctx, &self.input.style().font));
        glyphs.set_font(&self.input.style().font);

        self.update_focus(&response, now);

        let mut edited = false;
        if response.has_focus() {
            ui.memory_mut(|mem| {
                mem.set_focus_lock_filter(
                    response.id,
                    egui::EventFilter {
                        tab: false,
                        horizontal_arrows: true,
                        vertical_arrows: true,
                        escape: false,
                    },
                );
            });
            let (events, modifiers) = ui.input(|i| (i.events.clone(), i.modifiers));
            for event in translate(&events, modifiers) {
                match event {
                    HostEvent::Key(key) => match self.input.handle_key(&key, &glyphs, now) {
                        KeyResponse::Consumed { edited: true } => edited = true,
                        KeyResponse::Clipboard(request) => self.submit_clipboard(request),
                        _ => {}
                    },
                    HostEvent::Paste(text) => edited |= self.input.paste_text(&text, &glyphs, now),
                }
            }
        }

        let press_origin = ui.input(|i| i.pointer.press_origin());
        self.handle_pointer(&response, rect.min, press_origin, &glyphs, now);

        if let Some(worker) = &self.clipboard {
            for completion in worker.poll() {
                edited |= self.input.complete_clipboard(completion, &glyphs, now);
            }
        }

        let mut surface = EguiSurface::new(ui.painter_at(rect), rect, &mut glyphs);
        if let Some(render_loop) = self.render_loop.as_mut() {
            self.input
                .draw(render_loop, Some(&mut surface as &mut dyn Surface), now);
        }
        self.glyphs = Some(glyphs);

        let mut response = response;
        if edited {
            response.mark_changed();
        }
        response
    }

    fn update_focus(&mut self, response: &Response, now: f64) {
        if self.autofocus {
            self.autofocus = false;
            response.request_focus();
        }
        match self.focus_request.take() {
            Some(true) => response.request_focus(),
            Some(false) => response.surrender_focus(),
            None => {}
        }
        if response.clicked() || response.drag_started() {
            response.request_focus();
        }

        let focused = response.has_focus();
        if focused != self.input.is_focused() {
            if focused {
                self.input.focus(now);
            } else {
                self.input.blur();
            }
            self.attributes.notify_focus(focused);
        }
    }

    fn handle_pointer(
        &mut self,
        response: &Response,
        origin: Pos2,
        press_origin: Option<Pos2>,
        glyphs: &GlyphCache,
        now: f64,
    ) {
        let to_local = |p: Pos2| (p.x - origin.x, p.y - origin.y);
        let current = response.interact_pointer_pos().map(to_local);

        if response.drag_started() {
            // anchor where the button went down, not where the threshold was crossed
            if let Some((x, y)) = press_origin.map(to_local).or(current) {
                self.input
                    .handle_pointer(PointerEvent::Down { x, y }, glyphs, now);
            }
        } else if response.clicked() {
            if let Some((x, y)) = current {
                self.input
                    .handle_pointer(PointerEvent::Down { x, y }, glyphs, now);
            }
        }
        if response.dragged() {
            if let Some((x, y)) = current {
                self.input
                    .handle_pointer(PointerEvent::Move { x, y }, glyphs, now);
            }
        }
        if response.drag_stopped() || response.clicked() {
            self.input.handle_pointer(PointerEvent::Up, glyphs, now);
        } else if self.input.state().dragging && !response.dragged() && !response.hovered() {
            self.input.handle_pointer(PointerEvent::Leave, glyphs, now);
        }
    }

    fn submit_clipboard(&mut self, request: ClipboardRequest) {
        let worker = self.clipboard.get_or_insert_with(ClipboardWorker::spawn);
        worker.submit(request);
    }

    fn restyle(&mut self) {
        let padding = *self.attributes.padding.get();
        self.input
            .set_style(RenderStyle::from_options(&self.options, Some(padding)));
    }
}

impl Drop for CanvasInput {
    fn drop(&mut self) {
        self.unmount();
    }
}
