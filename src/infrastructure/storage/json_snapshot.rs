//! JSON Snapshot Repository
//!
//! The local-storage analogue: one key, one file (`<data_dir>/<key>.json`)
//! holding the JSON array of records. Saves go through a temp file and an
//! atomic rename under an advisory lock.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::entities::InventoryRecord;
use crate::domain::ports::{SnapshotError, SnapshotRepository};

pub const DEFAULT_STORAGE_KEY: &str = "inventaires";

pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(data_dir: &Path, key: &str) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", key)),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// First free name among `<file>.corrupt`, `<file>.corrupt.1`, ...
    fn quarantine_path(&self) -> PathBuf {
        let mut base = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        base.push(".corrupt");

        let first = self.path.with_file_name(&base);
        if !first.exists() {
            return first;
        }
        (1u32..)
            .map(|n| {
                let mut name = base.clone();
                name.push(format!(".{n}"));
                self.path.with_file_name(name)
            })
            .find(|candidate| !candidate.exists())
            .unwrap_or(first)
    }

    fn write_to_disk(&self, content: &[u8]) -> Result<(), SnapshotError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(access)?;
        tmp.write_all(content).map_err(access)?;
        tmp.persist(&self.path).map_err(|e| access(e.error))?;
        Ok(())
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> Result<Vec<InventoryRecord>, SnapshotError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(access)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| SnapshotError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save(&self, records: &[InventoryRecord]) -> Result<(), SnapshotError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(access)?;
        }

        let content = serde_json::to_vec_pretty(records).map_err(|e| {
            SnapshotError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let lock_file = fs::File::create(&lock_path).map_err(access)?;
        lock_file.lock_exclusive().map_err(access)?;

        let result = self.write_to_disk(&content);

        let _ = lock_file.unlock();
        if result.is_ok() {
            tracing::debug!(path = %self.path.display(), records = records.len(), "snapshot written");
        }
        result
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(access)?;
        Ok(Some(target))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn access(e: std::io::Error) -> SnapshotError {
    SnapshotError::AccessError {
        message: e.to_string(),
    }
}

/// `$XDG_DATA_HOME/inventaires` or the platform equivalent
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("inventaires"))
        .unwrap_or_else(|| PathBuf::from(".inventaires"))
}
