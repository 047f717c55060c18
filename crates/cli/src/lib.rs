//! # ClassBridge CLI
//!
//! Wiring and process concerns for the `classbridge` binary: argument
//! parsing, logging setup, the application context and exit status.

pub mod args;
pub mod context;
pub mod logging;

use classbridge_domain::{Result, SyncReport};

pub use args::{Args, LogFormat};
pub use context::AppContext;

/// Process exit status for a finished (or aborted) run.
///
/// `0` only when the batch was eligible and every record and configured
/// report succeeded; `1` otherwise.
pub fn exit_status(result: &Result<SyncReport>) -> u8 {
    match result {
        Ok(report) if report.is_success() => 0,
        _ => 1,
    }
}

/// Run once with the given arguments, logging the outcome.
pub async fn run(args: &Args) -> Result<SyncReport> {
    let result = match AppContext::load(args.config.clone(), args.check_only) {
        Ok(context) => context.run().await,
        Err(err) => Err(err),
    };

    match &result {
        Ok(report) => logging::log_run_summary(report),
        Err(err) => logging::log_run_error(err),
    }
    result
}
