//! Input configuration: load, save, and sanitize.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::color::CssColor;
use crate::edges::BoxEdges;

/// Everything a single canvas input is configured with.
///
/// Colors stay strings so user-written CSS forms survive a save; they are
/// resolved through [`CssColor::parse`] when the widget is styled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
    pub font_family: String,
    pub text_color: String,
    pub background_color: String,
    pub border_color: String,
    pub focus_border_color: String,
    pub selection_color: String,
    /// Shown in gray while the buffer is empty.
    pub placeholder: String,
    pub multiline: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 40.0,
            font_size: 20.0,
            font_family: "Arial".to_string(),
            text_color: "black".to_string(),
            background_color: "white".to_string(),
            border_color: "black".to_string(),
            focus_border_color: "blue".to_string(),
            selection_color: "rgba(0,120,215,0.3)".to_string(),
            placeholder: String::new(),
            multiline: false,
        }
    }
}

impl InputOptions {
    pub fn text_color(&self) -> CssColor {
        CssColor::parse_or(&self.text_color, CssColor::BLACK)
    }

    pub fn background_color(&self) -> CssColor {
        CssColor::parse_or(&self.background_color, CssColor::WHITE)
    }

    pub fn border_color(&self) -> CssColor {
        CssColor::parse_or(&self.border_color, CssColor::BLACK)
    }

    pub fn focus_border_color(&self) -> CssColor {
        CssColor::parse_or(&self.focus_border_color, CssColor::rgb(0, 0, 255))
    }

    pub fn selection_color(&self) -> CssColor {
        CssColor::parse_or(&self.selection_color, CssColor::rgba(0, 120, 215, 77))
    }

    /// Clamps sizes and resets colors that do not parse.
    pub fn sanitize(&mut self) {
        let defaults = Self::default();
        self.width = self.width.max(20.0);
        self.height = self.height.max(20.0);
        self.font_size = self.font_size.clamp(6.0, 144.0);
        if self.font_family.trim().is_empty() {
            self.font_family = defaults.font_family;
        }

        for (name, value, fallback) in [
            ("text_color", &mut self.text_color, defaults.text_color),
            ("background_color", &mut self.background_color, defaults.background_color),
            ("border_color", &mut self.border_color, defaults.border_color),
            ("focus_border_color", &mut self.focus_border_color, defaults.focus_border_color),
            ("selection_color", &mut self.selection_color, defaults.selection_color),
        ] {
            if CssColor::parse(value).is_none() {
                tracing::warn!("Invalid {name} {value:?}, using {fallback:?}");
                *value = fallback;
            }
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub input: InputOptions,
    /// CSS padding shorthand applied inside the border.
    pub padding: String,
    /// CSS margin shorthand applied outside the border.
    pub margin: String,
    pub blink_interval_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            input: InputOptions::default(),
            padding: "5px".to_string(),
            margin: "0px".to_string(),
            blink_interval_ms: 500,
        }
    }
}

impl InputConfig {
    /// Returns the config file path: `<config dir>/canvas-input/canvas-input.json`.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("canvas-input").join("canvas-input.json"))
            .unwrap_or_else(|| PathBuf::from("canvas-input.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<InputConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Broken files are left alone
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.input.sanitize();
        self.blink_interval_ms = self.blink_interval_ms.clamp(100, 2000);
        for (name, value) in [("padding", &mut self.padding), ("margin", &mut self.margin)] {
            if BoxEdges::parse(value).is_none() {
                tracing::warn!("Invalid {name} {value:?}, using 0px");
                *value = "0px".to_string();
            }
        }
    }

    pub fn padding(&self) -> BoxEdges {
        BoxEdges::parse(&self.padding).unwrap_or_default()
    }

    pub fn margin(&self) -> BoxEdges {
        BoxEdges::parse(&self.margin).unwrap_or_default()
    }

    pub fn blink_interval_secs(&self) -> f64 {
        self.blink_interval_ms as f64 / 1000.0
    }
}
