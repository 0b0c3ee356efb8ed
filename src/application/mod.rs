//! Application Layer
//!
//! Use-case orchestration on top of the domain:
//!
//! - `record_store` - In-memory records mirrored to a snapshot repository
//! - `form` / `modal` - The create/edit form and its container
//! - `table` - View model for the inventory table
//! - `overview` - The controller wiring all of the above

pub mod form;
pub mod modal;
pub mod overview;
pub mod record_store;
pub mod table;

pub use form::{FormError, FormMode, InventoryForm};
pub use modal::Modal;
pub use overview::{OverviewController, OverviewSettings};
pub use record_store::{RecordStore, RecoveredSnapshot};
pub use table::{
    build_table, InventoryTable, ProductCell, StockCell, StockLevel, TableColumn, TableRow,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
