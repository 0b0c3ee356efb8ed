//! Export flattening
//!
//! Turns inventory records into flat rows: date, product name, then one stock
//! column per store in catalog order. Serialization lives in infrastructure.

use crate::domain::entities::{Catalog, InventoryRecord};

pub const DATE_HEADER: &str = "date";
pub const PRODUCT_HEADER: &str = "produit";
/// Written in place of the name when a record points at a product that is no
/// longer in the catalog
pub const UNKNOWN_PRODUCT: &str = "Produit inconnu";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub date: String,
    pub product: String,
    /// One value per catalog store, 0 when the record has no entry
    pub stock: Vec<u32>,
}

impl ExportRow {
    pub fn fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(self.stock.len() + 2);
        fields.push(self.date.clone());
        fields.push(self.product.clone());
        fields.extend(self.stock.iter().map(u32::to_string));
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<ExportRow>,
}

impl ExportTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn build_export(records: &[InventoryRecord], catalog: &Catalog) -> ExportTable {
    let mut headers = vec![DATE_HEADER.to_string(), PRODUCT_HEADER.to_string()];
    headers.extend(catalog.stores().iter().map(|s| s.name.clone()));

    let rows = records
        .iter()
        .map(|record| ExportRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            product: catalog
                .product(&record.product_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
            stock: catalog
                .stores()
                .iter()
                .map(|store| record.stock_for(&store.id).unwrap_or(0))
                .collect(),
        })
        .collect();

    ExportTable { headers, rows }
}
