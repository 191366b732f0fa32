use eframe::egui::{self, RichText, Ui};

use crate::data::model::Dataset;
use crate::state::{AppState, Section};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("Data: {}", state.store.data_dir().display()));

        ui.separator();

        let loaded = Dataset::ALL
            .iter()
            .filter(|&&ds| !state.store.frame(ds).is_empty())
            .count();
        ui.label(format!("{loaded}/{} datasets loaded", Dataset::ALL.len()));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the section navigation and a per-dataset summary.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("📊 Navigation");
    ui.separator();

    for section in Section::ALL {
        if ui
            .selectable_label(state.section == section, section.title())
            .clicked()
        {
            state.section = section;
        }
    }

    ui.separator();
    ui.strong("Datasets");

    for ds in Dataset::ALL {
        let frame = state.store.frame(ds);
        let summary = if frame.is_empty() {
            format!("{} — no data", ds.label())
        } else {
            format!("{} — {} rows", ds.label(), frame.n_rows())
        };
        let text = if frame.is_empty() {
            RichText::new(summary).weak()
        } else {
            RichText::new(summary)
        };
        ui.label(text);
    }

    ui.separator();
    ui.label(RichText::new("Read-only dashboard • no data = no crash").small().weak());
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Select data folder")
        .pick_folder();

    if let Some(dir) = folder {
        log::info!("Switching data directory to {}", dir.display());
        state.set_data_dir(dir);
    }
}
