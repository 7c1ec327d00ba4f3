#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use canvas_input_config::InputConfig;
use clap::Parser;

/// A text input that draws its own caret, selection and scrolling.
#[derive(Parser, Debug)]
#[command(name = "canvas-input", version, about)]
struct Cli {
    /// Accept line breaks.
    #[arg(long)]
    multiline: bool,

    /// Text shown while the input is empty.
    #[arg(long)]
    placeholder: Option<String>,

    /// Initial text.
    #[arg(long)]
    value: Option<String>,

    /// Configuration file. Defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(InputConfig::config_path);
    tracing::info!("Starting canvas-input with {}", config_path.display());

    let startup_args = canvas_input_ui::StartupArgs {
        multiline: cli.multiline,
        placeholder: cli.placeholder,
        value: cli.value,
        config_path: Some(config_path),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0])
            .with_min_inner_size([240.0, 160.0]),
        ..Default::default()
    };

    eframe::run_native(
        "canvas-input",
        native_options,
        Box::new(move |cc| Ok(Box::new(canvas_input_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
