//! Configuration module for Inventaires
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (INVENTAIRES_*)
//! 3. Project config (./inventaires.toml)
//! 4. User config (~/.config/inventaires/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{discover, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    CatalogConfig, ColorMode, Config, DisplayConfig, ExportConfig, OutputConfig, StorageConfig,
};
