//! Inventory table view model
//!
//! Rows are records, columns are catalog stores. Dangling references are
//! explicit variants here so renderers pick a placeholder on purpose.

use chrono::NaiveDate;

use crate::domain::entities::{Catalog, InventoryRecord};
use crate::domain::value_objects::{ProductId, StoreId};

pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductCell {
    Known { name: String },
    /// The record points at a product missing from the catalog
    Unknown { id: ProductId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Normal,
}

impl StockLevel {
    pub fn classify(value: u32, low_threshold: u32) -> Self {
        if value < low_threshold {
            StockLevel::Low
        } else {
            StockLevel::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCell {
    Present { value: u32, level: StockLevel },
    /// The record predates this store and has no entry for it
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub store: StoreId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub product_id: ProductId,
    pub date: NaiveDate,
    pub product: ProductCell,
    /// One cell per column
    pub cells: Vec<StockCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryTable {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl InventoryTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Product behind the row at `index` (the row-selection callback payload)
    pub fn select(&self, index: usize) -> Option<&ProductId> {
        self.rows.get(index).map(|r| &r.product_id)
    }

    pub fn row_for(&self, product: &ProductId) -> Option<&TableRow> {
        self.rows.iter().find(|r| &r.product_id == product)
    }

    /// Cell at the intersection of a product row and a store column
    pub fn cell(&self, product: &ProductId, store: &StoreId) -> Option<StockCell> {
        let col = self.columns.iter().position(|c| &c.store == store)?;
        self.row_for(product).map(|r| r.cells[col])
    }
}

pub fn build_table(
    records: &[InventoryRecord],
    catalog: &Catalog,
    low_threshold: u32,
) -> InventoryTable {
    let columns = catalog
        .stores()
        .iter()
        .map(|s| TableColumn {
            store: s.id.clone(),
            name: s.name.clone(),
        })
        .collect::<Vec<_>>();

    let rows = records
        .iter()
        .map(|record| TableRow {
            product_id: record.product_id.clone(),
            date: record.date,
            product: match catalog.product(&record.product_id) {
                Some(p) => ProductCell::Known {
                    name: p.name.clone(),
                },
                None => ProductCell::Unknown {
                    id: record.product_id.clone(),
                },
            },
            cells: columns
                .iter()
                .map(|col| match record.stock_for(&col.store) {
                    Some(value) => StockCell::Present {
                        value,
                        level: StockLevel::classify(value, low_threshold),
                    },
                    None => StockCell::Missing,
                })
                .collect(),
        })
        .collect();

    InventoryTable { columns, rows }
}
