use std::sync::{Arc, Mutex};
use std::time::Duration;

use canvas_input_core::ClipboardService;
use canvas_input_ui::{App, StartupArgs};
use egui_kittest::Harness;

/// Creates a standard test harness with the demo app at 640x480.
pub fn create_harness() -> Harness<'static, App> {
    create_harness_with(StartupArgs::default())
}

pub fn create_harness_with(args: StartupArgs) -> Harness<'static, App> {
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(640.0, 480.0))
        .with_step_dt(1.0 / 120.0)
        .build_eframe(|cc| App::new(cc, args));
    // let autofocus settle
    harness.run();
    harness
}

/// Clipboard stored in memory so tests can seed and inspect it.
#[derive(Clone, Default)]
pub struct SharedClipboard(pub Arc<Mutex<String>>);

impl SharedClipboard {
    pub fn with(text: &str) -> Self {
        Self(Arc::new(Mutex::new(text.to_string())))
    }

    pub fn contents(&self) -> String {
        self.0.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl ClipboardService for SharedClipboard {
    fn read_text(&mut self) -> anyhow::Result<String> {
        Ok(self.contents())
    }

    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        *self.0.lock().map_err(|_| anyhow::anyhow!("poisoned"))? = text.to_string();
        Ok(())
    }
}

/// Steps the harness until `done` holds or a few seconds pass.
pub fn step_until(harness: &mut Harness<'static, App>, mut done: impl FnMut(&App) -> bool) -> bool {
    for _ in 0..300 {
        harness.step();
        if done(harness.state()) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}
