pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod universe;

use color_eyre::{eyre::eyre, Result};
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::app::StarflightApp;
use crate::universe::DriftUniverse;

fn main() -> Result<()> {
    setup()?;

    config::ensure_default_file();
    let mappings = config::load_or_default()?;
    let bindings = mappings.resolve()?;
    info!("control mappings resolved for all axes");

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_title("Starflight")
        .with_inner_size(egui::vec2(1280.0, 800.0));

    eframe::run_native(
        "Starflight",
        native_options,
        Box::new(move |cc| {
            let size = cc.egui_ctx.screen_rect().size();
            let universe = DriftUniverse::new(size.x.max(1.0), size.y.max(1.0));
            Ok(Box::new(StarflightApp::new(
                cc,
                Box::new(universe),
                bindings,
            )))
        }),
    )
    .map_err(|e| eyre!("failed to run ui: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
