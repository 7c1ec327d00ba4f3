//! Keyboard and pointer handling: turns input events into edits, caret
//! moves and clipboard requests.

use crate::clipboard::{ClipboardCompletion, ClipboardRequest};
use crate::edit::sanitize_incoming;
use crate::input::{Key, KeyEvent, PointerEvent};
use crate::layout::{line_col, pixel_to_offset, LayoutMetrics, TextMeasure};
use crate::state::EditorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditOptions {
    pub multiline: bool,
}

/// What the host should do after a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// Not ours; let the host handle it.
    Ignored,
    /// Handled. The host must suppress its own default action.
    Consumed { edited: bool },
    /// Handled; run this against the clipboard and report back.
    Clipboard(ClipboardRequest),
}

impl KeyResponse {
    const MOVED: Self = Self::Consumed { edited: false };
    const EDITED: Self = Self::Consumed { edited: true };

    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

pub fn handle_key(
    state: &mut EditorState,
    event: &KeyEvent,
    options: &EditOptions,
    now: f64,
) -> KeyResponse {
    if !state.focused {
        return KeyResponse::Ignored;
    }
    let shift = event.modifiers.shift;
    let len = state.buffer.len_chars();
    let caret = state.caret();

    match event.key {
        Key::ArrowLeft => {
            move_caret(state, caret.saturating_sub(1), shift, now);
            KeyResponse::MOVED
        }
        Key::ArrowRight => {
            move_caret(state, (caret + 1).min(len), shift, now);
            KeyResponse::MOVED
        }
        Key::ArrowUp | Key::ArrowDown if options.multiline => {
            if let Some(target) = vertical_target(state, event.key == Key::ArrowDown) {
                move_caret(state, target, shift, now);
            }
            KeyResponse::MOVED
        }
        Key::Backspace => KeyResponse::Consumed {
            edited: state.backspace(now),
        },
        Key::Delete => KeyResponse::Consumed {
            edited: state.delete_forward(now),
        },
        Key::Enter if options.multiline => {
            state.insert_text("\n", now);
            KeyResponse::EDITED
        }
        Key::Home => {
            let target = state.buffer.line_start_of(caret);
            move_caret(state, target, shift, now);
            KeyResponse::MOVED
        }
        Key::End => {
            let target = state.buffer.line_end_of(caret);
            move_caret(state, target, shift, now);
            KeyResponse::MOVED
        }
        Key::Character(ch) if event.modifiers.shortcut() => shortcut(state, ch, now),
        Key::Character(ch) if !event.modifiers.alt && !ch.is_control() => {
            let mut buf = [0u8; 4];
            state.insert_text(ch.encode_utf8(&mut buf), now);
            KeyResponse::EDITED
        }
        _ => KeyResponse::Ignored,
    }
}

fn shortcut(state: &mut EditorState, ch: char, now: f64) -> KeyResponse {
    match ch.to_ascii_lowercase() {
        'a' => {
            state.selection.start = 0;
            state.selection.end = state.buffer.len_chars();
            state.blink.reset(now);
            KeyResponse::MOVED
        }
        'c' => match state.selected_text() {
            Some(text) => KeyResponse::Clipboard(ClipboardRequest::Copy { text }),
            None => KeyResponse::MOVED,
        },
        'x' => match state.selected_text() {
            Some(text) => KeyResponse::Clipboard(ClipboardRequest::Cut {
                range: state.selection.range(),
                text,
            }),
            None => KeyResponse::MOVED,
        },
        'v' => KeyResponse::Clipboard(ClipboardRequest::Paste {
            range: state.selection.range(),
        }),
        _ => KeyResponse::Ignored,
    }
}

fn move_caret(state: &mut EditorState, offset: usize, extend: bool, now: f64) {
    state.selection.move_to(offset, extend);
    state.blink.reset(now);
}

/// Same column on the neighbouring line, clamped to that line's length.
fn vertical_target(state: &EditorState, down: bool) -> Option<usize> {
    let buffer = &state.buffer;
    let (line, column) = line_col(buffer, state.caret());
    let target_line = if down {
        Some(line + 1).filter(|l| *l < buffer.len_lines())?
    } else {
        line.checked_sub(1)?
    };
    let start = buffer.line_to_char(target_line).ok()?;
    let target_len = buffer.line_len_chars(target_line).ok()?;
    Some(start + column.min(target_len))
}

/// Applies a finished clipboard request. Returns true if the text changed.
///
/// Ranges were captured when the request was made and are clamped to the
/// current buffer, so edits made in the meantime never cause a panic.
pub fn complete_clipboard(
    state: &mut EditorState,
    completion: ClipboardCompletion,
    options: &EditOptions,
    now: f64,
) -> bool {
    match completion {
        ClipboardCompletion::Copied(Ok(())) => false,
        ClipboardCompletion::Copied(Err(e)) => {
            tracing::warn!("Copy to clipboard failed: {e:#}");
            false
        }
        ClipboardCompletion::Cut { range, result } => complete_cut(state, range, result, now),
        ClipboardCompletion::Pasted { range, result } => {
            complete_paste(state, range, result, options, now)
        }
    }
}

pub fn complete_cut(
    state: &mut EditorState,
    range: (usize, usize),
    result: anyhow::Result<()>,
    now: f64,
) -> bool {
    if let Err(e) = result {
        tracing::warn!("Cut to clipboard failed: {e:#}");
        return false;
    }
    let len = state.buffer.len_chars();
    let (from, to) = (range.0.min(len), range.1.min(len));
    if from == to {
        return false;
    }
    state.replace_range(from, to, "", now);
    true
}

pub fn complete_paste(
    state: &mut EditorState,
    range: (usize, usize),
    result: anyhow::Result<String>,
    options: &EditOptions,
    now: f64,
) -> bool {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Paste from clipboard failed: {e:#}");
            return false;
        }
    };
    let text = sanitize_incoming(&text, options.multiline);
    if text.is_empty() {
        return false;
    }
    state.replace_range(range.0, range.1, &text, now);
    true
}

/// Applies a pointer event. Returns true if the selection changed.
pub fn handle_pointer<M: TextMeasure + ?Sized>(
    state: &mut EditorState,
    event: PointerEvent,
    measure: &M,
    metrics: &LayoutMetrics,
    now: f64,
) -> bool {
    match event {
        PointerEvent::Down { x, y } => {
            let offset = pixel_to_offset(&state.buffer, measure, metrics, state.scroll, x, y);
            state.selection.collapse_to(offset);
            state.dragging = true;
            state.blink.reset(now);
            true
        }
        PointerEvent::Move { x, y } if state.dragging => {
            let offset = pixel_to_offset(&state.buffer, measure, metrics, state.scroll, x, y);
            let changed = state.selection.end != offset;
            state.selection.end = offset;
            changed
        }
        PointerEvent::Move { .. } => false,
        PointerEvent::Up | PointerEvent::Leave => {
            state.dragging = false;
            false
        }
    }
}
