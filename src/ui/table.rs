use eframe::egui::{TextStyle, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::Frame;

// ---------------------------------------------------------------------------
// Frame → striped table
// ---------------------------------------------------------------------------

/// Render a non-empty frame as a striped, virtualized table. Callers handle
/// the empty case themselves (the sections show a "no data" notice instead).
pub fn frame_table(ui: &mut Ui, id: &str, frame: &Frame) {
    let row_height = ui.text_style_height(&TextStyle::Body) + 4.0;

    TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .resizable(true)
        .columns(TableColumn::auto().at_least(80.0), frame.n_cols())
        .header(row_height + 4.0, |mut header| {
            for col in frame.columns() {
                header.col(|ui| {
                    ui.strong(&col.name);
                });
            }
        })
        .body(|body| {
            // rows() only materializes the visible slice, so large exports
            // stay cheap to scroll.
            body.rows(row_height, frame.n_rows(), |mut row| {
                let r = row.index();
                for col in frame.columns() {
                    row.col(|ui| {
                        ui.label(col.values[r].to_string());
                    });
                }
            });
        });
}
