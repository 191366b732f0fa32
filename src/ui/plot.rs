use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::StatusColors;
use crate::data::model::{CellValue, Column};

// ---------------------------------------------------------------------------
// Line chart of a numeric column
// ---------------------------------------------------------------------------

/// Plot a numeric column against its row index (the "Sales Trend" chart).
/// Null cells are skipped rather than drawn as zero.
pub fn line_chart(ui: &mut Ui, id: &str, column: &Column) {
    let points: PlotPoints = column
        .values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.as_f64().map(|y| [i as f64, y]))
        .collect();

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Row")
        .y_axis_label(column.name.clone())
        .height(280.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points).name(&column.name).width(1.5);
            plot_ui.line(line);
        });
}

// ---------------------------------------------------------------------------
// Status distribution bar chart
// ---------------------------------------------------------------------------

/// Bar chart of value counts for a status column, one colored chart per
/// status so each gets its own legend entry.
pub fn status_distribution(ui: &mut Ui, id: &str, column: &Column, colors: &StatusColors) {
    let mut counts: BTreeMap<&CellValue, usize> = BTreeMap::new();
    for value in column.values.iter().filter(|v| !v.is_null()) {
        *counts.entry(value).or_default() += 1;
    }

    Plot::new(id)
        .legend(Legend::default())
        .y_axis_label("Clients")
        .height(280.0)
        .show(ui, |plot_ui| {
            for (i, (value, count)) in counts.iter().enumerate() {
                let bar = Bar::new(i as f64, *count as f64).width(0.6);
                let chart = BarChart::new(vec![bar])
                    .name(value.to_string())
                    .color(colors.color_for(value));
                plot_ui.bar_chart(chart);
            }
        });
}
