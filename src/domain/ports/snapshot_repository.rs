//! SnapshotRepository port
//!
//! Persists the whole record list as one snapshot. Every save overwrites the
//! previous snapshot; there is no incremental append.

use std::path::PathBuf;

use crate::domain::entities::InventoryRecord;

pub trait SnapshotRepository {
    /// Load the persisted records. A missing snapshot is an empty list.
    fn load(&self) -> Result<Vec<InventoryRecord>, SnapshotError>;

    /// Overwrite the snapshot with `records`
    fn save(&self, records: &[InventoryRecord]) -> Result<(), SnapshotError>;

    /// Move an unreadable snapshot out of the way, returning where it went
    fn quarantine(&self) -> Result<Option<PathBuf>, SnapshotError>;

    /// Human-readable location, for status output
    fn location(&self) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Failed to access inventory snapshot: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize inventory snapshot: {message}")]
    SerializationError { message: String },

    #[error(
        "inventory snapshot corrupted: {path}\n  → Fix: move the file away or restore a backup\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
