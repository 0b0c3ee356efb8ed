//! Error types for Inventaires
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::form::FormError;
use crate::domain::ports::SnapshotError;

/// Result type alias for Inventaires operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Main error type for Inventaires operations
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The inventory form was submitted with invalid fields
    #[error(transparent)]
    Form(#[from] FormError),

    /// The snapshot could not be read or written
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// No record exists for the product being edited
    #[error("no inventory recorded for product '{product}'")]
    NoRecord { product: String },

    /// Product id is not part of the catalog
    #[error("unknown product '{product}'")]
    UnknownProduct { product: String },

    /// Store id is not part of the catalog
    #[error("unknown store '{store}'")]
    UnknownStore { store: String },

    /// Save was requested while no form is open
    #[error("no inventory form is open")]
    NoOpenForm,

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Catalog contains the same id twice
    #[error("duplicate {kind} id '{id}' in catalog")]
    DuplicateCatalogId { kind: &'static str, id: String },

    /// CSV serialization error
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The user aborted an interactive form
    #[error("aborted by user")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_record() {
        let err = InventoryError::NoRecord {
            product: "7".to_string(),
        };
        assert_eq!(err.to_string(), "no inventory recorded for product '7'");
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = InventoryError::InvalidConfig {
            file: PathBuf::from("inventaires.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in inventaires.toml: expected a table"
        );
    }

    #[test]
    fn test_form_error_is_transparent() {
        let err: InventoryError = FormError::MissingDate.into();
        assert_eq!(err.to_string(), FormError::MissingDate.to_string());
    }
}
