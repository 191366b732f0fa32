use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use thiserror::Error;

use super::model::{normalize_headers, CellValue, Column, Frame};

// ---------------------------------------------------------------------------
// Safe loader: xlsx → Frame, degrade-to-empty on any failure
// ---------------------------------------------------------------------------

/// Why a workbook could not be turned into a non-empty frame. Callers never
/// see this type; it exists so the warn-log names the actual cause instead
/// of a stringly-typed blur.
#[derive(Debug, Error)]
enum LoadError {
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("sheet {0:?} has no data rows")]
    NoDataRows(String),
    #[error("sheet {0:?} has no usable header cells")]
    NoHeaders(String),
}

/// Load a workbook into a [`Frame`], absorbing every failure.
///
/// An absent reference, a missing path, a corrupt or sheetless workbook, and
/// a first sheet with zero data rows all come back as [`Frame::empty()`].
/// The cause is logged at warn level but deliberately not surfaced: the UI
/// treats every flavor of "nothing to show" identically.
pub fn load(path: Option<&Path>) -> Frame {
    let Some(path) = path else {
        return Frame::empty();
    };
    if !path.exists() {
        log::warn!("Workbook {} does not exist", path.display());
        return Frame::empty();
    }

    match read_first_sheet(path) {
        Ok(frame) => {
            log::info!(
                "Loaded {} ({} rows, {} columns)",
                path.display(),
                frame.n_rows(),
                frame.n_cols()
            );
            frame
        }
        Err(e) => {
            log::warn!("Falling back to empty frame for {}: {e:#}", path.display());
            Frame::empty()
        }
    }
}

/// Parse the first sheet of an xlsx workbook. Header row supplies column
/// names (normalized and de-duplicated); remaining rows become cells.
fn read_first_sheet(path: &Path) -> Result<Frame> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("opening workbook {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or(LoadError::NoSheets)?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("reading sheet {sheet_name:?}"))?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| LoadError::NoDataRows(sheet_name.clone()))?;

    // Columns with a blank header cell are dropped along with their data.
    let keep: Vec<usize> = header_row
        .iter()
        .enumerate()
        .filter(|(_, cell)| !cell.to_string().trim().is_empty())
        .map(|(i, _)| i)
        .collect();
    if keep.is_empty() {
        return Err(LoadError::NoHeaders(sheet_name).into());
    }

    let raw_headers: Vec<String> = keep
        .iter()
        .map(|&i| header_row[i].to_string())
        .collect();
    let names = normalize_headers(raw_headers.iter().map(String::as_str));

    let mut columns: Vec<Column> = names
        .into_iter()
        .map(|name| Column {
            name,
            values: Vec::new(),
        })
        .collect();

    for row in rows {
        for (col, &src) in columns.iter_mut().zip(keep.iter()) {
            let value = row.get(src).map_or(CellValue::Null, cell_value);
            col.values.push(value);
        }
    }

    if columns[0].values.is_empty() {
        return Err(LoadError::NoDataRows(sheet_name).into());
    }

    Ok(Frame::from_columns(columns))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // Excel serial datetimes are kept as text; the dashboard only
        // displays them.
        Data::DateTime(dt) => CellValue::Date(dt.as_f64().to_string()),
        Data::DateTimeIso(s) => CellValue::Date(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use rust_xlsxwriter::Workbook;

    fn write_workbook(dir: &Path, name: &str, headers: &[&str], rows: &[&[f64]]) -> PathBuf {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, h) in headers.iter().enumerate() {
            sheet.write_string(0, col as u16, *h).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                sheet.write_number((r + 1) as u32, c as u16, *v).unwrap();
            }
        }
        let path = dir.join(name);
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn absent_reference_loads_empty() {
        assert_eq!(load(None), Frame::empty());
    }

    #[test]
    fn nonexistent_path_loads_empty() {
        let path = Path::new("/nonexistent/dir/sales.xlsx");
        assert_eq!(load(Some(path)), Frame::empty());
    }

    #[test]
    fn corrupt_workbook_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        assert_eq!(load(Some(&path)), Frame::empty());
    }

    #[test]
    fn header_only_sheet_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_workbook(dir.path(), "empty.xlsx", &["A", "B"], &[]);

        let frame = load(Some(&path));
        assert!(frame.is_empty());
        // The sentinel drops columns too.
        assert_eq!(frame.n_cols(), 0);
    }

    #[test]
    fn column_labels_are_normalized_in_order() {
        let dir = tempfile::tempdir().unwrap();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Client Status").unwrap();
        sheet.write_string(0, 1, "total-sales").unwrap();
        sheet.write_string(1, 0, "active").unwrap();
        sheet.write_number(1, 1, 1250.0).unwrap();
        let path = dir.path().join("client.xlsx");
        workbook.save(&path).unwrap();

        let frame = load(Some(&path));
        let names: Vec<&str> = frame.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["CLIENT_STATUS", "TOTAL_SALES"]);
        assert_eq!(frame.n_rows(), 1);
        assert_eq!(
            frame.column("CLIENT_STATUS").unwrap().values[0],
            CellValue::Text("active".into())
        );
        assert_eq!(
            frame.column("TOTAL_SALES").unwrap().values[0],
            CellValue::Float(1250.0)
        );
    }

    #[test]
    fn colliding_headers_get_suffixed() {
        let dir = tempfile::tempdir().unwrap();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Total Sales").unwrap();
        sheet.write_string(0, 1, "total-sales").unwrap();
        sheet.write_number(1, 0, 1.0).unwrap();
        sheet.write_number(1, 1, 2.0).unwrap();
        let path = dir.path().join("dupes.xlsx");
        workbook.save(&path).unwrap();

        let frame = load(Some(&path));
        let names: Vec<&str> = frame.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["TOTAL_SALES", "TOTAL_SALES_2"]);
    }

    #[test]
    fn loading_twice_is_value_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_workbook(
            dir.path(),
            "sales.xlsx",
            &["Revenue", "Units"],
            &[&[100.0, 3.0], &[250.5, 7.0]],
        );

        let first = load(Some(&path));
        let second = load(Some(&path));
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn ragged_rows_are_padded_with_nulls() {
        let dir = tempfile::tempdir().unwrap();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Region").unwrap();
        sheet.write_string(0, 1, "Revenue").unwrap();
        sheet.write_string(1, 0, "north").unwrap();
        sheet.write_number(1, 1, 10.0).unwrap();
        sheet.write_string(2, 0, "south").unwrap();
        // No revenue cell on the second data row.
        let path = dir.path().join("ragged.xlsx");
        workbook.save(&path).unwrap();

        let frame = load(Some(&path));
        assert_eq!(frame.n_rows(), 2);
        let revenue = frame.column("REVENUE").unwrap();
        assert_eq!(revenue.values[1], CellValue::Null);
        assert!(revenue.is_numeric());
    }
}
