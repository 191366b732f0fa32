mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::SalesAtlasApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional positional argument: the data directory (default ./data).
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Atlas – Analytics Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalesAtlasApp::new(data_dir)))),
    )
}
