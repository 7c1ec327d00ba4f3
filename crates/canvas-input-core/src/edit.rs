//! Text mutations. Every change funnels through [`EditorState::replace_range`].

use std::borrow::Cow;

use crate::state::EditorState;

/// Converts `"\r\n"` and lone `'\r'` to `'\n'`.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Prepares external text (paste, values) for a buffer in the given mode.
/// Single-line buffers get their line breaks dropped.
pub fn sanitize_incoming(text: &str, multiline: bool) -> Cow<'_, str> {
    let text = normalize_line_breaks(text);
    if !multiline && text.contains('\n') {
        Cow::Owned(text.replace('\n', ""))
    } else {
        text
    }
}

impl EditorState {
    /// Replaces `[from, to)` with `text`, puts the caret after the inserted
    /// text and restarts the blink. Returns the new caret offset.
    ///
    /// The range is normalized and clamped to the buffer first, so stale
    /// offsets from asynchronous completions land somewhere valid.
    pub fn replace_range(&mut self, from: usize, to: usize, text: &str, now: f64) -> usize {
        let len = self.buffer.len_chars();
        let start = from.min(to).min(len);
        let end = from.max(to).min(len);

        match self.buffer.replace(start, end, text) {
            Ok(()) => {
                let caret = start + text.chars().count();
                self.selection.collapse_to(caret);
                self.blink.reset(now);
                caret
            }
            Err(e) => {
                tracing::warn!("Edit rejected: {e}");
                self.selection.caret()
            }
        }
    }

    /// Replaces the selection (or inserts at the caret) with `text`.
    pub fn insert_text(&mut self, text: &str, now: f64) -> usize {
        let (start, end) = self.selection.range();
        self.replace_range(start, end, text, now)
    }

    /// Removes the selected range. Returns false when nothing was selected.
    pub fn delete_selection(&mut self, now: f64) -> bool {
        if self.selection.is_collapsed() {
            return false;
        }
        let (start, end) = self.selection.range();
        self.replace_range(start, end, "", now);
        true
    }

    /// Deletes the selection, or the char before the caret.
    pub fn backspace(&mut self, now: f64) -> bool {
        if self.delete_selection(now) {
            return true;
        }
        let caret = self.selection.caret();
        if caret == 0 {
            return false;
        }
        self.replace_range(caret - 1, caret, "", now);
        true
    }

    /// Deletes the selection, or the char after the caret.
    pub fn delete_forward(&mut self, now: f64) -> bool {
        if self.delete_selection(now) {
            return true;
        }
        let caret = self.selection.caret();
        if caret >= self.buffer.len_chars() {
            return false;
        }
        self.replace_range(caret, caret + 1, "", now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;

    #[test]
    fn test_normalize_line_breaks() {
        assert_eq!(normalize_line_breaks("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_line_breaks("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_sanitize_incoming_single_line_strips_breaks() {
        assert_eq!(sanitize_incoming("one\r\ntwo\n", false), "onetwo");
        assert_eq!(sanitize_incoming("one\r\ntwo", true), "one\ntwo");
    }

    #[test]
    fn test_replace_range_places_caret_after_insert() {
        let mut state = EditorState::with_text("hello");
        let caret = state.replace_range(1, 4, "EY", 2.0);
        assert_eq!(state.text(), "hEYo");
        assert_eq!(caret, 3);
        assert_eq!(state.selection, Selection::caret_at(3));
        assert!((state.blink.last_toggle - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_replace_range_normalizes_and_clamps() {
        let mut state = EditorState::with_text("abc");
        let caret = state.replace_range(10, 1, "", 0.0);
        assert_eq!(state.text(), "a");
        assert_eq!(caret, 1);
    }

    #[test]
    fn test_typing_over_selection_leaves_caret_after_char() {
        for (s, e) in [(0, 0), (0, 3), (2, 5), (5, 2), (6, 6)] {
            let mut state = EditorState::with_text("abcdef");
            state.selection = Selection::new(s, e);
            state.insert_text("z", 0.0);
            assert_eq!(state.caret(), s.min(e) + 1);
        }
    }

    #[test]
    fn test_backspace_three_times() {
        let mut state = EditorState::with_text("hello");
        state.selection = Selection::caret_at(5);
        for _ in 0..3 {
            assert!(state.backspace(0.0));
        }
        assert_eq!(state.text(), "he");
        assert_eq!(state.caret(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut state = EditorState::with_text("abc");
        state.blink.visible = false;
        assert!(!state.backspace(9.0));
        assert_eq!(state.text(), "abc");
        assert_eq!(state.caret(), 0);
        assert!(!state.blink.visible);
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut state = EditorState::with_text("abc");
        state.selection = Selection::caret_at(3);
        assert!(!state.delete_forward(0.0));
        assert_eq!(state.text(), "abc");
    }

    #[test]
    fn test_delete_with_selection_ignores_direction() {
        let mut state = EditorState::with_text("abcdef");
        state.selection = Selection::new(4, 1);
        assert!(state.delete_forward(0.0));
        assert_eq!(state.text(), "aef");
        assert_eq!(state.caret(), 1);

        let mut state = EditorState::with_text("abcdef");
        state.selection = Selection::new(1, 4);
        assert!(state.backspace(0.0));
        assert_eq!(state.text(), "aef");
        assert_eq!(state.caret(), 1);
    }

    #[test]
    fn test_delete_forward_removes_newline() {
        let mut state = EditorState::with_text("ab\ncd");
        state.selection = Selection::caret_at(2);
        assert!(state.delete_forward(0.0));
        assert_eq!(state.text(), "abcd");
    }
}
