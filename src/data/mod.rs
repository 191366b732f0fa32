/// Data layer: core types, file resolution, safe loading, and the cache.
///
/// Architecture:
/// ```text
///   data/*.xlsx
///        │
///        ▼
///   ┌──────────┐
///   │ resolver  │  keyword → Option<PathBuf>  (lexicographic tie-break)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  first sheet → Frame, any failure → Frame::empty()
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  store    │  DataStore: resolve once, load once, cache per dataset
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod resolver;
pub mod store;
