//! ERI Labeler - Row-by-row CSV labeling tool
//!
//! Upload a CSV, step through its rows, and assign each one an ERI score and a
//! labeler name. Labels are written back to disk after every submission.

mod config;
mod data;
mod gui;
mod labeling;

use anyhow::anyhow;
use config::LabelerConfig;
use eframe::egui;
use gui::LabelerApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = config::default_config_path();
    let config = config_path
        .as_deref()
        .map(LabelerConfig::load_or_default)
        .unwrap_or_default();
    info!(
        config = ?config_path,
        output = %config.output_path.display(),
        "starting ERI labeler"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("ERI Labeling Tool")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ERI Labeling Tool",
        options,
        Box::new(move |cc| Ok(Box::new(LabelerApp::new(cc, config, config_path)))),
    )
    .map_err(|e| anyhow!("failed to start UI: {e}"))
}
