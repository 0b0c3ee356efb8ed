//! Domain Services
//!
//! Stateless transformations over domain entities.

pub mod export;

pub use export::{build_export, ExportRow, ExportTable};
