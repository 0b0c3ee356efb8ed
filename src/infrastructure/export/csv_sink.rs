//! CSV export
//!
//! Serializes an `ExportTable` with the `csv` crate. Quoting and escaping are
//! whatever `csv::Writer` does by default.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::ports::{ExportReceipt, ExportSink};
use crate::domain::services::ExportTable;
use crate::error::InventoryResult;

pub const DEFAULT_EXPORT_FILE: &str = "inventaires.csv";

pub fn to_csv_bytes(table: &ExportTable) -> InventoryResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.fields())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

pub fn to_csv_string(table: &ExportTable) -> InventoryResult<String> {
    let bytes = to_csv_bytes(table)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvDestination {
    File(PathBuf),
    Stdout,
}

impl CsvDestination {
    /// `-` means stdout, anything else is a file path
    pub fn parse(value: &Path) -> Self {
        if value.as_os_str() == "-" {
            CsvDestination::Stdout
        } else {
            CsvDestination::File(value.to_path_buf())
        }
    }
}

pub struct CsvExporter {
    destination: CsvDestination,
}

impl CsvExporter {
    pub fn new(destination: CsvDestination) -> Self {
        Self { destination }
    }

    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self::new(CsvDestination::File(path.into()))
    }

    pub fn destination(&self) -> &CsvDestination {
        &self.destination
    }
}

impl ExportSink for CsvExporter {
    fn deliver(&self, table: &ExportTable) -> InventoryResult<ExportReceipt> {
        let bytes = to_csv_bytes(table)?;

        let destination = match &self.destination {
            CsvDestination::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(&bytes)?;
                out.flush()?;
                "stdout".to_string()
            }
            CsvDestination::File(path) => {
                let parent = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                std::fs::create_dir_all(parent)?;

                let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
                tmp.write_all(&bytes)?;
                tmp.persist(path).map_err(|e| e.error)?;
                path.display().to_string()
            }
        };

        Ok(ExportReceipt {
            rows: table.len(),
            destination,
        })
    }
}
