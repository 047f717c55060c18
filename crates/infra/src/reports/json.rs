use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use classbridge_core::ReportSink;
use classbridge_domain::{ClassBridgeError, ProvisionResult, Result};

use crate::errors::InfraError;

/// Writes the report as a pretty-printed JSON array, replacing the file.
///
/// Non-ASCII text is written as-is (UTF-8), never `\u` escaped.
#[derive(Debug, Clone)]
pub struct JsonReportSink {
    path: PathBuf,
}

impl JsonReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for JsonReportSink {
    fn name(&self) -> &str {
        "json"
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write(&self, results: &[ProvisionResult]) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| persistence(&self.path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, results)
            .map_err(|e| ClassBridgeError::from(InfraError::from(e)))?;
        writer.flush().map_err(|e| persistence(&self.path, e))
    }
}

fn persistence(path: &std::path::Path, err: std::io::Error) -> ClassBridgeError {
    ClassBridgeError::Persistence(format!("{}: {err}", path.display()))
}
