//! Report sinks
//!
//! Each configured destination gets its own sink; an unset destination is
//! simply skipped.

mod csv;
mod json;

use std::sync::Arc;

use classbridge_core::ReportSink;
use classbridge_domain::SyncConfig;

pub use self::csv::CsvReportSink;
pub use self::json::JsonReportSink;

/// Build the sinks named by the configuration, JSON first.
pub fn report_sinks_from_config(config: &SyncConfig) -> Vec<Arc<dyn ReportSink>> {
    let mut sinks: Vec<Arc<dyn ReportSink>> = Vec::new();
    if let Some(path) = config.json_report_path() {
        sinks.push(Arc::new(JsonReportSink::new(path)));
    }
    if let Some(path) = config.csv_report_path() {
        sinks.push(Arc::new(CsvReportSink::new(path)));
    }
    sinks
}
