mod app;
mod color;
mod config;
mod data;
mod format;
mod state;
mod ui;
mod view;

use anyhow::Context;
use app::OlympicsDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // A missing or malformed source is fatal before any window opens.
    let dataset = data::loader::load_file(&config.data_path)
        .inspect_err(|e| log::error!("Failed to load {}: {e}", config.data_path.display()))
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    log::info!(
        "Loaded {} records from {} ({} regions)",
        dataset.len(),
        config.data_path.display(),
        dataset.regions.len()
    );
    let state = AppState::new(dataset, config.data_path.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(OlympicsDashboardApp::new(state, config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard: {e}"))
}
