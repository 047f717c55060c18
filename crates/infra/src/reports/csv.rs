use std::path::PathBuf;

use classbridge_core::ReportSink;
use classbridge_domain::constants::REPORT_COLUMNS;
use classbridge_domain::{ClassBridgeError, ProvisionResult, Result};
use csv::WriterBuilder;

use crate::errors::InfraError;

/// Writes the report as CSV with a fixed header, replacing the file.
///
/// The header is written even when there are no rows.
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    path: PathBuf,
}

impl CsvReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for CsvReportSink {
    fn name(&self) -> &str {
        "csv"
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self, results: &[ProvisionResult]) -> Result<()> {
        let to_domain = |e: csv::Error| ClassBridgeError::from(InfraError::from(e));

        let mut writer =
            WriterBuilder::new().has_headers(false).from_path(&self.path).map_err(to_domain)?;

        writer.write_record(REPORT_COLUMNS).map_err(to_domain)?;
        for result in results {
            writer.serialize(result).map_err(to_domain)?;
        }
        writer.flush().map_err(|e| ClassBridgeError::from(InfraError::from(e)))
    }
}
