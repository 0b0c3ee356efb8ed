//! ExportSink port - where an export table ends up (file, stdout, buffer)

use crate::domain::services::ExportTable;
use crate::error::InventoryResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Data rows written, header excluded
    pub rows: usize,
    pub destination: String,
}

pub trait ExportSink {
    fn deliver(&self, table: &ExportTable) -> InventoryResult<ExportReceipt>;
}
