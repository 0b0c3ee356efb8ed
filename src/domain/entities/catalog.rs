//! Catalog entities
//!
//! Stores and products are static reference data. The catalog is built once at
//! startup and handed to whoever needs it; nothing mutates it afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProductId, StoreId};
use crate::error::{InventoryError, InventoryResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl Store {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: StoreId::new(id),
            name: name.into(),
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the smallest currency unit
    #[serde(default)]
    pub price: u64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
        }
    }
}

/// Stores and products, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    stores: Vec<Store>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(stores: Vec<Store>, products: Vec<Product>) -> InventoryResult<Self> {
        let mut seen = HashSet::new();
        for store in &stores {
            if !seen.insert(store.id.as_str()) {
                return Err(InventoryError::DuplicateCatalogId {
                    kind: "store",
                    id: store.id.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(InventoryError::DuplicateCatalogId {
                    kind: "product",
                    id: product.id.to_string(),
                });
            }
        }

        Ok(Self { stores, products })
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.id == id)
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Resolve a store by id, falling back to a case-insensitive name match
    pub fn resolve_store(&self, key: &str) -> Option<&Store> {
        self.stores
            .iter()
            .find(|s| s.id.as_str() == key)
            .or_else(|| self.stores.iter().find(|s| s.name.eq_ignore_ascii_case(key)))
    }

    /// Resolve a product by id, falling back to a case-insensitive name match
    pub fn resolve_product(&self, key: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == key)
            .or_else(|| {
                self.products
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(key))
            })
    }
}
