//! Domain Entities
//!
//! - `Catalog` - Stores and products (static reference data)
//! - `InventoryRecord` - Per-store stock of one product at a date
//! - `InventorySet` - Ordered records, one per product

mod catalog;
mod inventory_set;
mod record;

pub use catalog::{Catalog, Product, Store};
pub use inventory_set::{InventorySet, Upsert};
pub use record::InventoryRecord;
