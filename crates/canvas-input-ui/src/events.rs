//! Translation of egui input events into input-engine events.

use canvas_input_core::{Key, KeyEvent, Modifiers};

/// One event the widget acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Key(KeyEvent),
    /// Text egui already read from the system clipboard.
    Paste(String),
}

pub fn modifiers(m: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: m.shift,
        ctrl: m.ctrl,
        command: m.mac_cmd || m.command,
        alt: m.alt,
    }
}

fn map_key(key: egui::Key) -> Option<Key> {
    Some(match key {
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        egui::Key::ArrowUp => Key::ArrowUp,
        egui::Key::ArrowDown => Key::ArrowDown,
        egui::Key::Backspace => Key::Backspace,
        egui::Key::Delete => Key::Delete,
        egui::Key::Enter => Key::Enter,
        egui::Key::Home => Key::Home,
        egui::Key::End => Key::End,
        _ => return None,
    })
}

fn shortcut_letter(key: egui::Key) -> Option<char> {
    match key {
        egui::Key::A => Some('a'),
        egui::Key::C => Some('c'),
        egui::Key::V => Some('v'),
        egui::Key::X => Some('x'),
        _ => None,
    }
}

/// Translates one frame's worth of egui events.
///
/// egui-winit turns Ctrl+C/X/V into `Copy`/`Cut`/`Paste` events, while test
/// harnesses deliver the raw key chord. When a semantic clipboard event is
/// present the matching raw chord is dropped so the action runs once.
/// Typed characters arrive as `Text` events; their raw key presses are not
/// translated.
pub fn translate(events: &[egui::Event], current: egui::Modifiers) -> Vec<HostEvent> {
    let has_copy = events.iter().any(|e| matches!(e, egui::Event::Copy));
    let has_cut = events.iter().any(|e| matches!(e, egui::Event::Cut));
    let has_paste = events.iter().any(|e| matches!(e, egui::Event::Paste(_)));

    let mut out = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(text) => {
                // Ctrl/Alt combos are shortcuts, not text
                if current.ctrl || current.command || current.alt {
                    continue;
                }
                let m = modifiers(current);
                out.extend(
                    text.chars()
                        .map(|ch| HostEvent::Key(KeyEvent::new(Key::Character(ch), m))),
                );
            }
            egui::Event::Key {
                key,
                pressed: true,
                modifiers: m,
                ..
            } => {
                let m = modifiers(*m);
                if let Some(k) = map_key(*key) {
                    out.push(HostEvent::Key(KeyEvent::new(k, m)));
                } else if let Some(letter) = shortcut_letter(*key).filter(|_| m.shortcut()) {
                    let duplicate = match letter {
                        'c' => has_copy,
                        'x' => has_cut,
                        'v' => has_paste,
                        _ => false,
                    };
                    if !duplicate {
                        out.push(HostEvent::Key(KeyEvent::new(Key::Character(letter), m)));
                    }
                }
            }
            egui::Event::Copy => out.push(HostEvent::Key(KeyEvent::shortcut('c'))),
            egui::Event::Cut => out.push(HostEvent::Key(KeyEvent::shortcut('x'))),
            egui::Event::Paste(text) => out.push(HostEvent::Paste(text.clone())),
            _ => {}
        }
    }
    out
}
