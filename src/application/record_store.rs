//! Record Store
//!
//! Keeps the in-memory `InventorySet` and mirrors it to a snapshot repository
//! after every change.

use std::path::PathBuf;

use crate::domain::entities::{InventoryRecord, InventorySet, Upsert};
use crate::domain::ports::{SnapshotError, SnapshotRepository};
use crate::domain::value_objects::ProductId;
use crate::error::InventoryResult;

/// Raised when the persisted snapshot could not be parsed and the store
/// started empty instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredSnapshot {
    pub message: String,
    /// Where the unreadable snapshot was moved, if it could be moved
    pub moved_to: Option<PathBuf>,
}

pub struct RecordStore<R: SnapshotRepository> {
    repository: R,
    records: InventorySet,
    recovered: Option<RecoveredSnapshot>,
}

impl<R: SnapshotRepository> RecordStore<R> {
    /// Load the persisted snapshot, or start empty when there is none.
    ///
    /// A corrupted snapshot also starts empty; it is moved aside first so the
    /// next save cannot overwrite it. Access errors are returned.
    pub fn open(repository: R) -> InventoryResult<Self> {
        let (records, recovered) = match repository.load() {
            Ok(records) => (records.into_iter().collect::<InventorySet>(), None),
            Err(SnapshotError::Corrupted { path, message }) => {
                tracing::warn!(path = %path.display(), %message, "inventory snapshot unreadable, starting empty");
                let moved_to = match repository.quarantine() {
                    Ok(moved) => moved,
                    Err(e) => {
                        tracing::warn!(error = %e, "could not move unreadable snapshot aside");
                        None
                    }
                };
                (
                    InventorySet::new(),
                    Some(RecoveredSnapshot { message, moved_to }),
                )
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            location = %repository.location(),
            records = records.len(),
            "inventory snapshot loaded"
        );

        Ok(Self {
            repository,
            records,
            recovered,
        })
    }

    /// Insert or replace the record for its product, then persist the full
    /// snapshot.
    ///
    /// The in-memory change is kept even when persisting fails.
    pub fn upsert(&mut self, record: InventoryRecord) -> InventoryResult<Upsert> {
        let product = record.product_id.clone();
        let outcome = self.records.upsert(record);
        tracing::info!(product = %product, ?outcome, "inventory record upserted");

        self.repository.save(self.records.records())?;
        Ok(outcome)
    }

    pub fn find_by_product(&self, product: &ProductId) -> Option<&InventoryRecord> {
        self.records.find(product)
    }

    pub fn records(&self) -> &[InventoryRecord] {
        self.records.records()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn recovered(&self) -> Option<&RecoveredSnapshot> {
        self.recovered.as_ref()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
