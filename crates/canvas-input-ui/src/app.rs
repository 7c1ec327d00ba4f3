//! Demo application hosting two inputs: an uncontrolled primary input and a
//! controlled one whose value is mirrored by the app.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use canvas_input_config::InputConfig;
use canvas_input_core::ValueSource;

use crate::registry::{Subscription, WidgetRegistry};
use crate::widget::CanvasInput;

pub const PRIMARY: &str = "primary";
pub const MIRROR: &str = "mirror";

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// Accept line breaks in the primary input.
    pub multiline: bool,
    pub placeholder: Option<String>,
    /// Initial text of the primary input.
    pub value: Option<String>,
    /// Configuration file to load; built-in defaults when unset.
    pub config_path: Option<PathBuf>,
}

pub type SharedInput = Rc<RefCell<CanvasInput>>;

pub struct App {
    pub registry: WidgetRegistry<RefCell<CanvasInput>>,
    pub primary: SharedInput,
    pub mirror: SharedInput,
    /// Last value reported by the controlled input.
    pub mirrored_value: Rc<RefCell<String>>,
    /// Registry notifications seen so far.
    pub registry_changes: Rc<Cell<u32>>,
    /// Focus changes of the primary input, oldest first.
    pub focus_log: Rc<RefCell<Vec<bool>>>,
    _subscription: Subscription,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let mut config = match &args.config_path {
            Some(path) => InputConfig::load_or_create(path),
            None => InputConfig::default(),
        };
        if args.multiline {
            config.input.multiline = true;
        }
        if let Some(placeholder) = &args.placeholder {
            config.input.placeholder = placeholder.clone();
        }

        let registry = WidgetRegistry::new();
        let registry_changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&registry_changes);
        let subscription = registry.subscribe(move || counter.set(counter.get() + 1));

        let initial = args.value.as_deref().unwrap_or_default();
        let primary = CanvasInput::new(PRIMARY, &config, initial, ValueSource::Uncontrolled).autofocus();
        let primary = Rc::new(RefCell::new(primary));

        let focus_log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&focus_log);
        primary
            .borrow_mut()
            .attributes_mut()
            .on_focus_change(move |focused| sink.borrow_mut().push(focused));

        let mirrored_value = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&mirrored_value);
        let mut mirror_config = config.clone();
        mirror_config.input.multiline = false;
        mirror_config.input.placeholder = "Controlled".to_string();
        let mirror = CanvasInput::new(
            MIRROR,
            &mirror_config,
            "",
            ValueSource::controlled(move |text| *sink.borrow_mut() = text.to_string()),
        );
        let mirror = Rc::new(RefCell::new(mirror));

        registry.register(PRIMARY, Rc::clone(&primary));
        registry.register(MIRROR, Rc::clone(&mirror));

        Self {
            registry,
            primary,
            mirror,
            mirrored_value,
            registry_changes,
            focus_log,
            _subscription: subscription,
        }
    }

    /// Clears the controlled input through its external value.
    pub fn clear_mirror(&mut self) {
        if self.mirror.borrow_mut().set_value("") {
            self.mirrored_value.borrow_mut().clear();
        }
    }
}

impl eframe::App for App {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show_inside(ui, |ui| {
            ui.label("Uncontrolled");
            let length = {
                let mut primary = self.primary.borrow_mut();
                primary.show(ui);
                primary.text().chars().count()
            };
            ui.label(format!("{length} chars"));

            ui.add_space(8.0);
            ui.label("Controlled");
            self.mirror.borrow_mut().show(ui);
            ui.label(format!("Value: {}", self.mirrored_value.borrow()));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Focus").clicked() {
                    self.primary.borrow_mut().focus();
                }
                if ui.button("Blur").clicked() {
                    self.primary.borrow_mut().blur();
                }
                if ui.button("Clear").clicked() {
                    self.clear_mirror();
                }
            });
            ui.label(format!("Registered: {}", self.registry.names().join(", ")));
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.registry.unregister(PRIMARY, &self.primary);
        self.registry.unregister(MIRROR, &self.mirror);
    }
}
