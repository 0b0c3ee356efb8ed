//! Snapshot storage implementations

mod json_snapshot;

pub use json_snapshot::{default_data_dir, JsonSnapshotRepository, DEFAULT_STORAGE_KEY};
