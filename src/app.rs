use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, sections};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesAtlasApp {
    pub state: AppState,
}

impl SalesAtlasApp {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(data_dir),
        }
    }
}

impl eframe::App for SalesAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: selected section ----
        egui::CentralPanel::default().show(ctx, |ui| {
            sections::central_panel(ui, &mut self.state);
        });
    }
}
