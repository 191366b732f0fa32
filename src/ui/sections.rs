use eframe::egui::{RichText, Ui};

use crate::data::model::Dataset;
use crate::state::{AppState, Section, CLIENT_STATUS_COLUMN};

use super::{plot, table};

// ---------------------------------------------------------------------------
// Central panel: per-section dashboard views
// ---------------------------------------------------------------------------

/// Render the currently selected section.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(state.section.title());
    ui.separator();

    match state.section {
        Section::Overview => overview(ui, state),
        Section::SalesPerformance => sales_performance(ui, state),
        Section::SkuAnalysis => {
            dataset_table(ui, state, Dataset::Sku, "sku_table", "No SKU data available")
        }
        Section::ClientStatus => client_status(ui, state),
        Section::AdvancedInsights => dataset_table(
            ui,
            state,
            Dataset::Advanced,
            "advanced_table",
            "No advanced insights data available",
        ),
    }
}

// ---- Overview -------------------------------------------------------------

fn overview(ui: &mut Ui, state: &mut AppState) {
    let (sales_empty, total_revenue, sales_rows) = {
        let sales = state.store.frame(Dataset::Sales);
        (sales.is_empty(), sales.numeric_total(), sales.n_rows())
    };

    if sales_empty {
        no_data_notice(ui, "No sales data available");
        return;
    }

    let active_clients = state.store.frame(Dataset::Client).n_rows();

    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total Revenue", format_thousands(total_revenue));
        metric(&mut cols[1], "Rows", sales_rows.to_string());
        metric(&mut cols[2], "Active Clients", active_clients.to_string());
    });
}

// ---- Sales Performance ----------------------------------------------------

fn sales_performance(ui: &mut Ui, state: &mut AppState) {
    let frame = state.store.frame(Dataset::Sales);
    if frame.is_empty() {
        no_data_notice(ui, "No sales data available");
        return;
    }

    // Chart first (fixed height), table fills the remaining space with its
    // own scroll area.
    if let Some(trend) = frame.numeric_columns().next() {
        ui.strong("Sales Trend");
        plot::line_chart(ui, "sales_trend", trend);
        ui.add_space(8.0);
    }
    table::frame_table(ui, "sales_table", frame);
}

// ---- Client Status --------------------------------------------------------

fn client_status(ui: &mut Ui, state: &mut AppState) {
    let frame = state.store.frame(Dataset::Client);
    if frame.is_empty() {
        no_data_notice(ui, "No client status data available");
        return;
    }

    let colors = &state.status_colors;
    if let Some(status) = frame.column(CLIENT_STATUS_COLUMN) {
        ui.strong("Client Distribution");
        plot::status_distribution(ui, "client_distribution", status, colors);
        ui.add_space(8.0);
    }
    table::frame_table(ui, "client_table", frame);
}

// ---- Plain table sections -------------------------------------------------

fn dataset_table(ui: &mut Ui, state: &mut AppState, dataset: Dataset, id: &str, notice: &str) {
    let frame = state.store.frame(dataset);
    if frame.is_empty() {
        no_data_notice(ui, notice);
        return;
    }

    table::frame_table(ui, id, frame);
}

// ---- Shared widgets -------------------------------------------------------

fn no_data_notice(ui: &mut Ui, message: &str) {
    let color = ui.visuals().warn_fg_color;
    ui.colored_label(color, format!("⚠ {message}"));
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).heading().strong());
    });
}

/// `1234567.0` → `"1,234,567"`, matching the upstream dashboard's
/// thousands-grouped metric formatting.
fn format_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
