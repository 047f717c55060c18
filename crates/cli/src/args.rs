//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Provision Zoom meetings for a class-schedule export, gated on presenter
/// licenses.
#[derive(Parser, Debug, Clone)]
#[command(name = "classbridge", version)]
pub struct Args {
    /// Config file (JSON or TOML). Without it, environment variables and the
    /// standard config locations are tried.
    #[arg(long, env = "CLASSBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Load and check licenses only; create nothing
    #[arg(long)]
    pub check_only: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, env = "CLASSBRIDGE_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}
