pub mod app;
pub mod attributes;
pub mod clipboard;
pub mod events;
pub mod registry;
pub mod surface;
pub mod theme;
pub mod widget;

pub use app::{App, StartupArgs};
pub use attributes::{Attribute, AttributeObservers};
pub use clipboard::{ArboardClipboard, ClipboardWorker};
pub use registry::{Subscription, WidgetRegistry};
pub use widget::CanvasInput;
