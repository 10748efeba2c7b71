mod app;
mod config;
mod error;
mod graphql;
mod logging;
mod models;
mod ui;

use anyhow::Result;
use app::TableFilterApp;
use config::Config;
use eframe::egui;
use std::sync::Arc;

fn main() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = Config::load();

    // Shared runtime for every remote call
    let runtime = Arc::new(tokio::runtime::Runtime::new()?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Table Filter"),
        ..Default::default()
    };

    eframe::run_native(
        "Table Filter",
        options,
        Box::new(move |cc| Box::new(TableFilterApp::new(cc, config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {}", e))
}
