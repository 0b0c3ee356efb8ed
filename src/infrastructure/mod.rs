//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//!
//! - `storage` - JSON snapshot file (`SnapshotRepository`)
//! - `export` - CSV file/stdout sink (`ExportSink`)
//! - `catalog` - Built-in store and product lists

pub mod catalog;
pub mod export;
pub mod storage;

pub use catalog::{build_catalog, default_products, default_stores};
pub use export::{CsvDestination, CsvExporter, DEFAULT_EXPORT_FILE};
pub use storage::{default_data_dir, JsonSnapshotRepository, DEFAULT_STORAGE_KEY};
