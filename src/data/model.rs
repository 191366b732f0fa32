use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a frame column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the dtypes found in the Excel
/// exports. Used as a `BTreeMap` key downstream (status counting, coloring)
/// so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date kept as text (ISO-8601 where the workbook provides it).
    Date(String),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeMap/BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                Text(_) => 4,
                Date(_) => 5,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) | (Date(a), Date(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Text(s) | CellValue::Date(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{v:.0}")
                } else {
                    write!(f, "{v:.2}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for charting and sums.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of a frame
// ---------------------------------------------------------------------------

/// A named column: an ordered sequence of cells, positionally aligned with
/// every other column of its frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    /// A column counts as numeric when it holds at least one number and
    /// nothing but numbers and nulls.
    pub fn is_numeric(&self) -> bool {
        let mut seen_number = false;
        for v in &self.values {
            match v {
                CellValue::Integer(_) | CellValue::Float(_) => seen_number = true,
                CellValue::Null => {}
                _ => return false,
            }
        }
        seen_number
    }

    /// Sum of the numeric cells (nulls contribute nothing).
    pub fn numeric_sum(&self) -> f64 {
        self.values.iter().filter_map(CellValue::as_f64).sum()
    }
}

// ---------------------------------------------------------------------------
// Frame – the loaded tabular snapshot
// ---------------------------------------------------------------------------

/// An immutable in-memory table. Invariants: every column has `n_rows`
/// values, and column names are unique (the loader suffixes collisions).
///
/// `Frame::empty()` (zero columns, zero rows) is the uniform "no data"
/// sentinel; there is deliberately no separate missing/None case.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Frame {
    /// The canonical "no data" value.
    pub fn empty() -> Self {
        Frame {
            columns: Vec::new(),
            n_rows: 0,
        }
    }

    /// Build a frame from equal-length columns. Collapses to the empty
    /// sentinel when there are no columns or no rows, so a frame is never
    /// "structurally present but blank".
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let n_rows = columns.first().map_or(0, |c| c.values.len());
        debug_assert!(columns.iter().all(|c| c.values.len() == n_rows));
        if n_rows == 0 || columns.is_empty() {
            return Frame::empty();
        }
        Frame { columns, n_rows }
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns holding numbers, in frame order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_numeric())
    }

    /// Sum of every numeric cell across the whole frame (the Overview
    /// "total revenue" figure).
    pub fn numeric_total(&self) -> f64 {
        self.numeric_columns().map(Column::numeric_sum).sum()
    }
}

// ---------------------------------------------------------------------------
// Column label normalization
// ---------------------------------------------------------------------------

/// Canonicalize a raw header cell: trim, uppercase, spaces and hyphens
/// become underscores. `"Client Status"` → `"CLIENT_STATUS"`.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_uppercase().replace([' ', '-'], "_")
}

/// Normalize a header row, suffixing post-normalization collisions with
/// `_2`, `_3`, … in first-seen order so frame columns stay unique.
pub fn normalize_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for label in raw.map(|r| normalize_label(r)) {
        let mut candidate = label.clone();
        let mut n = 1usize;
        while out.contains(&candidate) {
            n += 1;
            candidate = format!("{label}_{n}");
        }
        out.push(candidate);
    }
    out
}

// ---------------------------------------------------------------------------
// Dataset – the fixed set of logical datasets
// ---------------------------------------------------------------------------

/// The four logical datasets the dashboard knows about. References are
/// resolved once at startup and are immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dataset {
    Sales,
    Sku,
    Client,
    Advanced,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Sales,
        Dataset::Sku,
        Dataset::Client,
        Dataset::Advanced,
    ];

    /// The substring matched case-insensitively against file names.
    pub fn keyword(self) -> &'static str {
        match self {
            Dataset::Sales => "sales_analysis_results",
            Dataset::Sku => "sku_analysis",
            Dataset::Client => "client_status_analysis",
            Dataset::Advanced => "advanced_sales_insights",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dataset::Sales => "Sales",
            Dataset::Sku => "SKU",
            Dataset::Client => "Clients",
            Dataset::Advanced => "Advanced",
        }
    }
}
