//! Gomoku GUI
//!
//! Play Black against the computer.

use std::path::PathBuf;

use gomoku::config::{AppConfig, DEFAULT_CONFIG_PATH};
use gomoku::ui::GomokuApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    let path = std::env::var_os("GOMOKU_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let (config, config_err) = match AppConfig::load_or_default(&path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(err) = config_err {
        tracing::warn!(%err, path = %path.display(), "ignoring config file");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 520.0])
            .with_title("Gomoku vs Computer"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
}
