//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod export_sink;
pub mod snapshot_repository;

pub use export_sink::{ExportReceipt, ExportSink};
pub use snapshot_repository::{SnapshotError, SnapshotRepository};
