//! Event types shared by every command's `--json` output.

use std::collections::BTreeMap;

use serde::Serialize;

use inventaires::application::{InventoryTable, ProductCell, StockCell, StockLevel};
use inventaires::domain::entities::InventoryRecord;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }
}

/// Non-fatal problem (unreadable snapshot, unknown config key)
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// Wrapper for data events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}

/// One table row. Unknown products have `product: null`, missing stock
/// entries are left out of `stock`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RowData {
    pub product_id: String,
    pub product: Option<String>,
    pub date: String,
    pub stock: BTreeMap<String, u32>,
    pub low_stock: Vec<String>,
}

impl RowData {
    pub fn from_table(table: &InventoryTable) -> Vec<Self> {
        table
            .rows
            .iter()
            .map(|row| {
                let mut stock = BTreeMap::new();
                let mut low_stock = Vec::new();
                for (column, cell) in table.columns.iter().zip(&row.cells) {
                    if let StockCell::Present { value, level } = cell {
                        stock.insert(column.store.to_string(), *value);
                        if *level == StockLevel::Low {
                            low_stock.push(column.store.to_string());
                        }
                    }
                }
                let product = match &row.product {
                    ProductCell::Known { name } => Some(name.clone()),
                    ProductCell::Unknown { .. } => None,
                };
                RowData {
                    product_id: row.product_id.to_string(),
                    product,
                    date: row.date.to_string(),
                    stock,
                    low_stock,
                }
            })
            .collect()
    }
}

/// A record as it was saved
#[derive(Debug, Clone, Serialize)]
pub struct SavedData<'a> {
    pub outcome: &'static str,
    pub position: usize,
    pub record: &'a InventoryRecord,
}
