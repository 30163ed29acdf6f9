//! StackPad - tabbed plain-text editor
//!
//! Folder sidebar, tabbed documents, zoom, find & replace, and a session file
//! that brings every open tab back after a restart.

mod app;
mod core;
mod ui;

use app::StackPadApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting StackPad...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("StackPad"),
        ..Default::default()
    };

    eframe::run_native(
        "StackPad",
        native_options,
        Box::new(|cc| Ok(Box::new(StackPadApp::new(cc)))),
    )
}
