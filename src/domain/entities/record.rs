//! Inventory record entity

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProductId, StoreId};

/// Stock count of one product across stores, as of `date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub date: NaiveDate,
    #[serde(alias = "produitId")]
    pub product_id: ProductId,
    #[serde(default)]
    pub stock: BTreeMap<StoreId, u32>,
}

impl InventoryRecord {
    pub fn new(date: NaiveDate, product_id: ProductId, stock: BTreeMap<StoreId, u32>) -> Self {
        Self {
            date,
            product_id,
            stock,
        }
    }

    /// Stock for a store, `None` when the record has no entry for it
    pub fn stock_for(&self, store: &StoreId) -> Option<u32> {
        self.stock.get(store).copied()
    }
}
