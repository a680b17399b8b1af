//! Calculator - desktop calculator with history, themes and RU/EN labels
//!
//! Expressions are evaluated on a background thread so the window stays
//! responsive; results are collected by the UI loop.

mod eval;
mod gui;
mod i18n;
mod session;
mod settings;
mod worker;

use anyhow::Result;
use eframe::egui;
use gui::CalculatorApp;
use i18n::Strings;
use settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load();
    info!("settings={:?}", settings);
    let title = Strings::for_lang(settings.lang).title;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 550.0])
            .with_resizable(false)
            .with_title(title),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(CalculatorApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run egui application: {}", e))?;

    Ok(())
}
