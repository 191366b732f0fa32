use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::loader;
use super::model::{Dataset, Frame};
use super::resolver;

// ---------------------------------------------------------------------------
// DataStore – resolve-once, load-once dataset cache
// ---------------------------------------------------------------------------

/// Owns the resolved dataset references and the memoized frames.
///
/// Built once at startup (and again if the user picks a new data folder) and
/// held by the application object; there is no hidden module-level cache.
/// Each dataset's workbook is read at most once per store lifetime; a frame,
/// once cached, is never mutated or invalidated — the inputs are a static
/// read-only snapshot.
pub struct DataStore {
    dir: PathBuf,
    refs: BTreeMap<Dataset, Option<PathBuf>>,
    cache: BTreeMap<Dataset, Frame>,
}

impl DataStore {
    /// Scan `dir` and resolve all four dataset references. Frames are not
    /// loaded yet; see [`DataStore::frame`] / [`DataStore::load_all`].
    pub fn new(dir: PathBuf) -> Self {
        let refs: BTreeMap<Dataset, Option<PathBuf>> = Dataset::ALL
            .iter()
            .map(|&ds| (ds, resolver::resolve(&dir, ds.keyword())))
            .collect();

        for (ds, path) in &refs {
            match path {
                Some(p) => log::info!("{}: resolved to {}", ds.keyword(), p.display()),
                None => log::info!("{}: no matching workbook", ds.keyword()),
            }
        }

        DataStore {
            dir,
            refs,
            cache: BTreeMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    /// The resolved workbook path for a dataset, if one matched.
    pub fn path(&self, dataset: Dataset) -> Option<&Path> {
        self.refs.get(&dataset).and_then(|p| p.as_deref())
    }

    /// The frame for a dataset, loading and caching it on first access.
    /// Always returns a valid frame; "no data" is the empty frame.
    pub fn frame(&mut self, dataset: Dataset) -> &Frame {
        if !self.cache.contains_key(&dataset) {
            let path = self.refs.get(&dataset).and_then(|p| p.as_deref());
            let frame = loader::load(path);
            self.cache.insert(dataset, frame);
        }
        &self.cache[&dataset]
    }

    /// Eagerly load every dataset (startup path, so the first UI frame does
    /// not pay the file reads).
    pub fn load_all(&mut self) {
        for ds in Dataset::ALL {
            self.frame(ds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_xlsxwriter::Workbook;

    fn write_sales_workbook(dir: &Path, name: &str) -> PathBuf {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Client Status").unwrap();
        sheet.write_string(0, 1, "total-sales").unwrap();
        sheet.write_string(1, 0, "active").unwrap();
        sheet.write_number(1, 1, 900.0).unwrap();
        sheet.write_string(2, 0, "churned").unwrap();
        sheet.write_number(2, 1, 150.0).unwrap();
        let path = dir.join(name);
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn unresolved_datasets_yield_the_empty_frame() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DataStore::new(dir.path().to_path_buf());

        assert!(store.path(Dataset::Sku).is_none());
        assert!(store.frame(Dataset::Sku).is_empty());
    }

    #[test]
    fn missing_data_directory_degrades_everywhere() {
        let mut store = DataStore::new(PathBuf::from("/nonexistent/data"));
        store.load_all();
        for ds in Dataset::ALL {
            assert!(store.frame(ds).is_empty());
        }
    }

    #[test]
    fn cache_hit_equals_cache_miss() {
        let dir = tempfile::tempdir().unwrap();
        write_sales_workbook(dir.path(), "Sales_Analysis_Results (6).xlsx");

        let mut store = DataStore::new(dir.path().to_path_buf());
        let first = store.frame(Dataset::Sales).clone();
        let second = store.frame(Dataset::Sales).clone();

        assert!(!first.is_empty());
        assert_eq!(first, second);

        // Deleting the file after the first load must not matter: the cache
        // serves the snapshot for the store's lifetime.
        std::fs::remove_file(store.path(Dataset::Sales).unwrap()).unwrap();
        assert_eq!(store.frame(Dataset::Sales), &first);
    }

    #[test]
    fn end_to_end_sales_resolution_and_load() {
        let dir = tempfile::tempdir().unwrap();
        write_sales_workbook(dir.path(), "Sales_Analysis_Results (6).xlsx");

        let mut store = DataStore::new(dir.path().to_path_buf());
        let resolved = store.path(Dataset::Sales).unwrap();
        assert_eq!(
            resolved.file_name().unwrap().to_str().unwrap(),
            "Sales_Analysis_Results (6).xlsx"
        );

        let frame = store.frame(Dataset::Sales);
        assert!(!frame.is_empty());
        for col in frame.columns() {
            assert_eq!(col.name, col.name.to_uppercase());
            assert!(!col.name.contains(' ') && !col.name.contains('-'));
        }
        // First numeric column feeds the Sales Trend chart.
        let numeric = frame.numeric_columns().next().unwrap();
        assert_eq!(numeric.name, "TOTAL_SALES");
        assert_eq!(numeric.numeric_sum(), 1050.0);
    }
}
