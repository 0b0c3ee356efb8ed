//! Inventaires - per-store stock tracker
//!
//! Records, shows, edits and exports the stock of a fixed product catalog
//! across the stores of a retail chain. One record per product, persisted as
//! a JSON snapshot, exported as `inventaires.csv`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    FormError, InventoryForm, InventoryTable, OverviewController, OverviewSettings, RecordStore,
};
pub use config::Config;
pub use domain::entities::{Catalog, InventoryRecord, InventorySet, Product, Store};
pub use domain::value_objects::{Locale, ProductId, StoreId};
pub use error::{InventoryError, InventoryResult};
