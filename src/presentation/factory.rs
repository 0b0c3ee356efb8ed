//! Controller Factory
//!
//! Creates the overview controller with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{OverviewController, OverviewSettings, RecordStore};
use crate::config::Config;
use crate::error::InventoryResult;
use crate::infrastructure::{CsvDestination, CsvExporter, JsonSnapshotRepository};

/// Type alias for the controller backed by the JSON snapshot file
pub type ConcreteOverview = OverviewController<JsonSnapshotRepository>;

pub fn create_snapshot_repository(config: &Config) -> JsonSnapshotRepository {
    JsonSnapshotRepository::with_path(config.snapshot_path())
}

/// Build the catalog, open the snapshot and hand both to a controller
pub fn create_overview(config: &Config) -> InventoryResult<ConcreteOverview> {
    let catalog = config.catalog()?;
    let store = RecordStore::open(create_snapshot_repository(config))?;
    let settings = OverviewSettings {
        locale: config.display.locale,
        low_stock_threshold: config.display.low_stock_threshold,
    };

    Ok(OverviewController::new(catalog, store, settings))
}

/// CSV exporter for `output`, or the configured file name in the current
/// directory
pub fn create_csv_exporter(config: &Config, output: Option<&Path>) -> CsvExporter {
    match output {
        Some(path) => CsvExporter::new(CsvDestination::parse(path)),
        None => CsvExporter::to_file(&config.export.file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.storage.data_dir = Some(dir.to_path_buf());
        config
    }

    #[test]
    fn create_overview_on_empty_dir() {
        let dir = tempdir().unwrap();
        let overview = create_overview(&config_in(dir.path())).unwrap();
        assert!(overview.records().is_empty());
        assert_eq!(overview.catalog().stores().len(), 5);
    }

    #[test]
    fn snapshot_repository_uses_configured_path() {
        let dir = tempdir().unwrap();
        let repo = create_snapshot_repository(&config_in(dir.path()));
        assert_eq!(repo.path(), dir.path().join("inventaires.json"));
    }

    #[test]
    fn exporter_defaults_to_configured_file_name() {
        let exporter = create_csv_exporter(&Config::default(), None);
        assert_eq!(
            exporter.destination(),
            &CsvDestination::File(PathBuf::from("inventaires.csv"))
        );
    }
}
