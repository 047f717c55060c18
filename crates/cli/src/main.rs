//! `classbridge` - license-gated batch provisioning of class meetings.

use std::process::ExitCode;

use clap::Parser;
use classbridge_cli::{exit_status, logging, Args};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before logging init so RUST_LOG from it takes effect
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    logging::init(args.log_format);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let result = classbridge_cli::run(&args).await;
    ExitCode::from(exit_status(&result))
}
