pub mod buffer;
pub mod clipboard;
pub mod controller;
pub mod edit;
pub mod editor;
pub mod frame;
pub mod input;
pub mod layout;
pub mod render;
pub mod selection;
pub mod state;
pub mod value;
pub mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use buffer::TextBuffer;
pub use clipboard::{ClipboardCompletion, ClipboardRequest, ClipboardService};
pub use controller::{EditOptions, KeyResponse};
pub use editor::TextInput;
pub use frame::{FrameOutcome, FrameScheduler, RenderLoop};
pub use input::{Key, KeyEvent, Modifiers, PointerEvent};
pub use layout::{CaretPoint, LayoutMetrics, TextMeasure};
pub use render::{FontSpec, Rect, RenderStyle, Surface};
pub use selection::Selection;
pub use state::{CursorBlink, EditorState, ScrollOffset};
pub use value::ValueSource;
