mod config;
mod engine;
mod model;
mod ui;

use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::ui::app::{ConfigErrorApp, CourtApp};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app: Box<dyn eframe::App> = match build_app() {
        Ok(app) => Box::new(app),
        Err(message) => {
            tracing::error!("{message}");
            Box::new(ConfigErrorApp { message })
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Agent of Justice")
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native("Agent of Justice", options, Box::new(|_cc| Ok(app)))
}

fn build_app() -> Result<CourtApp, String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    tracing::info!(
        api_base = %config.api_base,
        precise = %config.profiles.precise.model_id,
        exploratory = %config.profiles.exploratory.model_id,
        "configuration loaded"
    );
    CourtApp::new(config).map_err(|e| format!("failed to start backend client: {e}"))
}
