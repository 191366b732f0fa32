use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Keyword → file resolution
// ---------------------------------------------------------------------------

/// The only spreadsheet format the dashboard ingests.
const SPREADSHEET_EXT: &str = "xlsx";

/// Find the workbook for a logical dataset keyword.
///
/// Scans `dir` (non-recursive) for `.xlsx` files whose file name contains
/// `keyword` case-insensitively; upstream exports carry decorations like
/// `Sales_Analysis_Results (6).xlsx`, hence substring matching. Ties are
/// broken by the lexicographically smallest file name so resolution is
/// deterministic across platforms. A missing or unreadable directory is
/// "no match", never an error.
pub fn resolve(dir: &Path, keyword: &str) -> Option<PathBuf> {
    let needle = keyword.to_lowercase();

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read data directory {}: {e}", dir.display());
            return None;
        }
    };

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| has_spreadsheet_ext(path))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect();

    matches.sort();
    matches.into_iter().next()
}

fn has_spreadsheet_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SPREADSHEET_EXT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"stub").unwrap();
    }

    #[test]
    fn matches_keyword_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Sales_Analysis_Results (6).xlsx");

        let found = resolve(dir.path(), "sales_analysis_results").unwrap();
        assert_eq!(
            found.file_name().unwrap().to_str().unwrap(),
            "Sales_Analysis_Results (6).xlsx"
        );
    }

    #[test]
    fn no_match_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "unrelated_report.xlsx");

        assert!(resolve(dir.path(), "sku_analysis").is_none());
    }

    #[test]
    fn missing_directory_is_no_match() {
        assert!(resolve(Path::new("/nonexistent/data/dir"), "sales").is_none());
    }

    #[test]
    fn ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "sku_analysis.csv");
        touch(dir.path(), "sku_analysis.xlsx.bak");

        assert!(resolve(dir.path(), "sku_analysis").is_none());
    }

    #[test]
    fn ties_break_to_lexicographically_smallest_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "sku_analysis (2).xlsx");
        touch(dir.path(), "sku_analysis (10).xlsx");
        touch(dir.path(), "sku_analysis.xlsx");

        let found = resolve(dir.path(), "sku_analysis").unwrap();
        // "sku_analysis (10)" < "sku_analysis (2)" < "sku_analysis." bytewise.
        assert_eq!(
            found.file_name().unwrap().to_str().unwrap(),
            "sku_analysis (10).xlsx"
        );
    }

    #[test]
    fn uppercase_extension_still_matches() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Client_Status_Analysis.XLSX");

        assert!(resolve(dir.path(), "client_status_analysis").is_some());
    }
}
