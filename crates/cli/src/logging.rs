use classbridge_domain::{ClassBridgeError, SyncReport};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::LogFormat;

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// filter.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Log the end-of-run summary with structured fields.
pub fn log_run_summary(report: &SyncReport) {
    let created = report.outcome.as_ref().map_or(0, |o| o.created.len());
    let failed = report.outcome.as_ref().map_or(0, |o| o.failed.len());
    let sink_failures = report.sinks.iter().filter(|s| !s.succeeded()).count();

    if !report.verdict.is_eligible() {
        warn!(
            records = report.records_loaded,
            violations = report.verdict.violations.len(),
            "run_blocked_by_license_check"
        );
        return;
    }

    if report.is_success() {
        info!(records = report.records_loaded, created, "run_completed");
    } else {
        warn!(
            records = report.records_loaded,
            created,
            failed,
            sink_failures,
            "run_completed_with_failures"
        );
    }
}

/// Log a run that stopped on an error before finishing.
pub fn log_run_error(error: &ClassBridgeError) {
    error!(error_type = error.label(), fatal = error.is_fatal(), error = %error, "run_aborted");
}
