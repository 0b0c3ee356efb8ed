//! Export sinks

mod csv_sink;

pub use csv_sink::{
    to_csv_bytes, to_csv_string, CsvDestination, CsvExporter, DEFAULT_EXPORT_FILE,
};
