/// Tests for the input widget driven through the demo app.
///
/// The input paints itself, so behavior is checked through widget state
/// after feeding egui events.
mod common;

use canvas_input_core::Selection;
use canvas_input_ui::{ClipboardWorker, StartupArgs};
use egui::{Key, Modifiers};

use common::{create_harness, create_harness_with, step_until, SharedClipboard};

fn type_text(harness: &mut egui_kittest::Harness<'static, canvas_input_ui::App>, text: &str) {
    harness.event(egui::Event::Text(text.to_string()));
    harness.run();
}

// ── A. Mount & focus ───────────────────────────────────────────────────────

#[test]
fn test_primary_input_is_mounted_and_focused() {
    let harness = create_harness();
    let primary = harness.state().primary.borrow();
    assert!(primary.is_mounted());
    assert!(primary.is_focused());
    assert!(primary.frames() > 0);
    assert_eq!(*harness.state().focus_log.borrow(), vec![true]);
}

#[test]
fn test_startup_value_and_placeholder() {
    let harness = create_harness_with(StartupArgs {
        value: Some("hello".to_string()),
        placeholder: Some("Name".to_string()),
        ..StartupArgs::default()
    });
    let primary = harness.state().primary.borrow();
    assert_eq!(primary.text(), "hello");
    assert_eq!(primary.input().style().placeholder, "Name");
}

#[test]
fn test_blur_and_focus_are_imperative() {
    let mut harness = create_harness();
    harness.state().primary.borrow_mut().blur();
    harness.run();
    assert!(!harness.state().primary.borrow().is_focused());

    harness.state().primary.borrow_mut().focus();
    harness.run();
    assert!(harness.state().primary.borrow().is_focused());
    assert_eq!(*harness.state().focus_log.borrow(), vec![true, false, true]);
}

// ── B. Typing & editing ────────────────────────────────────────────────────

#[test]
fn test_typing_inserts_text() {
    let mut harness = create_harness();
    type_text(&mut harness, "abc");
    let primary = harness.state().primary.borrow();
    assert_eq!(primary.text(), "abc");
    assert_eq!(primary.input().selection(), Selection::caret_at(3));
}

#[test]
fn test_backspace_removes_last_char() {
    let mut harness = create_harness();
    type_text(&mut harness, "hello");
    for _ in 0..3 {
        harness.key_press(Key::Backspace);
    }
    harness.run();
    assert_eq!(harness.state().primary.borrow().text(), "he");
}

#[test]
fn test_arrow_then_type_inserts_in_middle() {
    let mut harness = create_harness();
    type_text(&mut harness, "ac");
    harness.key_press(Key::ArrowLeft);
    harness.run();
    type_text(&mut harness, "b");
    assert_eq!(harness.state().primary.borrow().text(), "abc");
}

#[test]
fn test_enter_ignored_in_single_line_mode() {
    let mut harness = create_harness();
    type_text(&mut harness, "a");
    harness.key_press(Key::Enter);
    harness.run();
    assert_eq!(harness.state().primary.borrow().text(), "a");
}

#[test]
fn test_enter_breaks_line_in_multiline_mode() {
    let mut harness = create_harness_with(StartupArgs {
        multiline: true,
        ..StartupArgs::default()
    });
    type_text(&mut harness, "a");
    harness.key_press(Key::Enter);
    harness.run();
    type_text(&mut harness, "b");
    assert_eq!(harness.state().primary.borrow().text(), "a\nb");
}

#[test]
fn test_select_all_then_type_replaces() {
    let mut harness = create_harness_with(StartupArgs {
        value: Some("old text".to_string()),
        ..StartupArgs::default()
    });
    harness.key_press_modifiers(Modifiers::COMMAND, Key::A);
    harness.run();
    assert_eq!(harness.state().primary.borrow().input().selection(), Selection::new(0, 8));
    type_text(&mut harness, "n");
    assert_eq!(harness.state().primary.borrow().text(), "n");
}

#[test]
fn test_keys_ignored_after_blur() {
    let mut harness = create_harness();
    harness.state().primary.borrow_mut().blur();
    harness.run();
    type_text(&mut harness, "x");
    assert_eq!(harness.state().primary.borrow().text(), "");
}

// ── C. Pointer ─────────────────────────────────────────────────────────────

fn pointer_button(harness: &mut egui_kittest::Harness<'static, canvas_input_ui::App>, pos: egui::Pos2, pressed: bool) {
    harness.event(egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    });
    harness.run();
}

fn pointer_move(harness: &mut egui_kittest::Harness<'static, canvas_input_ui::App>, pos: egui::Pos2) {
    harness.event(egui::Event::PointerMoved(pos));
    harness.run();
}

#[test]
fn test_drag_selection_anchors_at_press_position() {
    let mut harness = create_harness_with(StartupArgs {
        value: Some("abcdefghij".to_string()),
        ..StartupArgs::default()
    });
    let rect = harness.state().primary.borrow().rect().unwrap();
    // just inside the left padding, before the first glyph's midpoint
    let press = egui::pos2(rect.left() + 5.5, rect.center().y);

    pointer_move(&mut harness, press);
    pointer_button(&mut harness, press, true);
    // crosses the drag threshold past the first glyph's midpoint
    pointer_move(&mut harness, press + egui::vec2(12.0, 0.0));
    pointer_move(&mut harness, press + egui::vec2(200.0, 0.0));
    pointer_button(&mut harness, press + egui::vec2(200.0, 0.0), false);

    let primary = harness.state().primary.borrow();
    let selection = primary.input().selection();
    assert_eq!(selection.start, 0);
    assert!(selection.end > 1);
    assert!(!primary.input().state().dragging);
}

// ── D. Clipboard ───────────────────────────────────────────────────────────

#[test]
fn test_copy_writes_selection_to_clipboard() {
    let mut harness = create_harness_with(StartupArgs {
        value: Some("abcdef".to_string()),
        ..StartupArgs::default()
    });
    let clipboard = SharedClipboard::default();
    let service = clipboard.clone();
    {
        let mut primary = harness.state().primary.borrow_mut();
        primary.set_clipboard(ClipboardWorker::spawn_with(move || Ok(service)));
        primary.input_mut().set_selection(1, 4);
    }
    harness.event(egui::Event::Copy);
    harness.run();

    let written = clipboard.clone();
    assert!(step_until(&mut harness, move |_| written.contents() == "bcd"));
    assert_eq!(harness.state().primary.borrow().text(), "abcdef");
}

#[test]
fn test_cut_removes_selection_after_completion() {
    let mut harness = create_harness_with(StartupArgs {
        value: Some("abcdef".to_string()),
        ..StartupArgs::default()
    });
    let clipboard = SharedClipboard::default();
    let service = clipboard.clone();
    {
        let mut primary = harness.state().primary.borrow_mut();
        primary.set_clipboard(ClipboardWorker::spawn_with(move || Ok(service)));
        primary.input_mut().set_selection(1, 4);
    }
    harness.key_press_modifiers(Modifiers::COMMAND, Key::X);
    harness.run();

    assert!(step_until(&mut harness, |app| app.primary.borrow().text() == "aef"));
    assert_eq!(clipboard.contents(), "bcd");
    assert_eq!(harness.state().primary.borrow().input().selection(), Selection::caret_at(1));
}

#[test]
fn test_paste_shortcut_reads_clipboard() {
    let mut harness = create_harness();
    let service = SharedClipboard::with("one\r\ntwo");
    harness
        .state()
        .primary
        .borrow_mut()
        .set_clipboard(ClipboardWorker::spawn_with(move || Ok(service)));
    harness.key_press_modifiers(Modifiers::COMMAND, Key::V);
    harness.run();

    // single-line mode drops the line break
    assert!(step_until(&mut harness, |app| app.primary.borrow().text() == "onetwo"));
}

#[test]
fn test_paste_event_inserts_text() {
    let mut harness = create_harness();
    harness.event(egui::Event::Paste("pasted".to_string()));
    harness.run();
    assert_eq!(harness.state().primary.borrow().text(), "pasted");
}

// ── E. Controlled input & registry ─────────────────────────────────────────

#[test]
fn test_controlled_input_reports_edits() {
    let mut harness = create_harness();
    harness.state().mirror.borrow_mut().focus();
    harness.run();
    type_text(&mut harness, "hi");
    assert_eq!(*harness.state().mirrored_value.borrow(), "hi");
    assert_eq!(harness.state().mirror.borrow().text(), "hi");
    // the primary input lost focus to the mirror
    assert!(!harness.state().primary.borrow().is_focused());
}

#[test]
fn test_clear_pushes_external_value() {
    let mut harness = create_harness();
    harness.state().mirror.borrow_mut().focus();
    harness.run();
    type_text(&mut harness, "abc");
    harness.state_mut().clear_mirror();
    harness.run();
    assert_eq!(harness.state().mirror.borrow().text(), "");
    assert_eq!(*harness.state().mirrored_value.borrow(), "");
}

#[test]
fn test_uncontrolled_ignores_external_value() {
    let mut harness = create_harness();
    type_text(&mut harness, "mine");
    assert!(!harness.state().primary.borrow_mut().set_value("theirs"));
    assert_eq!(harness.state().primary.borrow().text(), "mine");
}

#[test]
fn test_registry_lists_both_inputs() {
    let harness = create_harness();
    let app = harness.state();
    assert_eq!(app.registry.names(), vec!["mirror", "primary"]);
    assert_eq!(app.registry_changes.get(), 2);
    let found = app.registry.find("primary").map(|w| w.borrow().name().to_string());
    assert_eq!(found.as_deref(), Some("primary"));
}

#[test]
fn test_unmount_stops_render_loop() {
    let harness = create_harness();
    let mut primary = harness.state().primary.borrow_mut();
    primary.unmount();
    assert!(!primary.is_mounted());
}
