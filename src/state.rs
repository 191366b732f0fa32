use std::path::PathBuf;

use crate::color::StatusColors;
use crate::data::model::Dataset;
use crate::data::store::DataStore;

/// Column the client distribution chart keys on.
pub const CLIENT_STATUS_COLUMN: &str = "CLIENT_STATUS";

// ---------------------------------------------------------------------------
// Section – the dashboard navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    SalesPerformance,
    SkuAnalysis,
    ClientStatus,
    AdvancedInsights,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::SalesPerformance,
        Section::SkuAnalysis,
        Section::ClientStatus,
        Section::AdvancedInsights,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::SalesPerformance => "Sales Performance",
            Section::SkuAnalysis => "SKU Analysis",
            Section::ClientStatus => "Client Status",
            Section::AdvancedInsights => "Advanced Insights",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Resolved references and memoized frames for the four datasets.
    pub store: DataStore,

    /// Currently selected dashboard section.
    pub section: Section,

    /// Stable colours for the client status distribution chart.
    pub status_colors: StatusColors,
}

impl AppState {
    /// Build the state for a data directory: resolve references, load all
    /// frames eagerly, derive the status colour map.
    pub fn new(data_dir: PathBuf) -> Self {
        let mut store = DataStore::new(data_dir);
        store.load_all();
        let status_colors = client_status_colors(&mut store);

        AppState {
            store,
            section: Section::Overview,
            status_colors,
        }
    }

    /// Point the dashboard at a different data folder. The old store (and
    /// its cache) is dropped wholesale and rebuilt.
    pub fn set_data_dir(&mut self, data_dir: PathBuf) {
        self.store = DataStore::new(data_dir);
        self.store.load_all();
        self.status_colors = client_status_colors(&mut self.store);
    }
}

fn client_status_colors(store: &mut DataStore) -> StatusColors {
    match store.frame(Dataset::Client).column(CLIENT_STATUS_COLUMN) {
        Some(col) => StatusColors::new(col.values.iter().filter(|v| !v.is_null())),
        None => StatusColors::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use rust_xlsxwriter::Workbook;

    #[test]
    fn state_builds_even_without_a_data_directory() {
        let state = AppState::new(PathBuf::from("/nonexistent/data"));
        assert_eq!(state.section, Section::Overview);
    }

    #[test]
    fn switching_data_dirs_rebuilds_the_store() {
        fn write_client_workbook(dir: &Path) {
            let mut workbook = Workbook::new();
            let sheet = workbook.add_worksheet();
            sheet.write_string(0, 0, "Client Status").unwrap();
            sheet.write_string(1, 0, "active").unwrap();
            sheet.write_string(2, 0, "churned").unwrap();
            workbook
                .save(dir.join("client_status_analysis.xlsx"))
                .unwrap();
        }

        let empty_dir = tempfile::tempdir().unwrap();
        let full_dir = tempfile::tempdir().unwrap();
        write_client_workbook(full_dir.path());

        let mut state = AppState::new(empty_dir.path().to_path_buf());
        assert!(state.store.frame(Dataset::Client).is_empty());

        state.set_data_dir(full_dir.path().to_path_buf());
        assert_eq!(state.store.frame(Dataset::Client).n_rows(), 2);
    }
}
