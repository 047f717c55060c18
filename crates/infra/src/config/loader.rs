//! Configuration loader
//!
//! Loads the run configuration from an explicit file, environment variables
//! or a probed file.
//!
//! ## Loading Strategy
//! 1. An explicit path (from `--config`) is loaded as-is
//! 2. Otherwise, environment variables are used when `CLASSBRIDGE_INPUT_FILE`
//!    is set
//! 3. Otherwise, multiple paths are probed for a config file
//! 4. JSON and TOML formats are supported
//!
//! The loaded configuration is validated before it is returned.
//!
//! ## Environment Variables
//! - `CLASSBRIDGE_INPUT_FILE`: Class-schedule export to read (required)
//! - `CLASSBRIDGE_BEARER_TOKEN`: Pre-issued bearer token
//! - `CLASSBRIDGE_API_KEY`: Token signing issuer
//! - `CLASSBRIDGE_API_SECRET`: Token signing secret
//! - `CLASSBRIDGE_OUTPUT_JSON`: JSON report path
//! - `CLASSBRIDGE_OUTPUT_CSV`: CSV report path
//! - `CLASSBRIDGE_API_BASE_URL`: Provider REST base URL
//! - `CLASSBRIDGE_TIMEOUT_SECS`: Per-request HTTP timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./classbridge.json` or `./classbridge.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use classbridge_domain::{ClassBridgeError, Result, SyncConfig};

const ENV_INPUT_FILE: &str = "CLASSBRIDGE_INPUT_FILE";
const ENV_BEARER_TOKEN: &str = "CLASSBRIDGE_BEARER_TOKEN";
const ENV_API_KEY: &str = "CLASSBRIDGE_API_KEY";
const ENV_API_SECRET: &str = "CLASSBRIDGE_API_SECRET";
const ENV_OUTPUT_JSON: &str = "CLASSBRIDGE_OUTPUT_JSON";
const ENV_OUTPUT_CSV: &str = "CLASSBRIDGE_OUTPUT_CSV";
const ENV_API_BASE_URL: &str = "CLASSBRIDGE_API_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "CLASSBRIDGE_TIMEOUT_SECS";

/// Load and validate the run configuration.
///
/// An explicit `path` always wins. Without one, environment variables are
/// tried first and the probed config file second.
///
/// # Errors
/// Returns `ClassBridgeError::Config` if:
/// - Configuration cannot be loaded from any source
/// - File format is invalid
/// - Required fields are missing or no credential is configured
pub fn load(path: Option<PathBuf>) -> Result<SyncConfig> {
    let config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match load_from_env() {
            Ok(config) => {
                tracing::info!("Configuration loaded from environment variables");
                config
            }
            Err(e) => {
                tracing::debug!(error = ?e, "Failed to load from environment, trying file");
                load_from_file(None)?
            }
        },
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `CLASSBRIDGE_INPUT_FILE` is required here; the remaining variables
/// fall back to their defaults. Credential completeness is checked by
/// [`SyncConfig::validate`].
///
/// # Errors
/// Returns `ClassBridgeError::Config` if the input file variable is missing
/// or the timeout is not a number.
pub fn load_from_env() -> Result<SyncConfig> {
    let mut config = SyncConfig::new(env_var(ENV_INPUT_FILE)?);

    config.bearer_token = env_opt(ENV_BEARER_TOKEN);
    config.api_key = env_opt(ENV_API_KEY);
    config.api_secret = env_opt(ENV_API_SECRET);
    config.output_file_json = env_opt(ENV_OUTPUT_JSON).map(PathBuf::from);
    config.output_file_csv = env_opt(ENV_OUTPUT_CSV).map(PathBuf::from);

    if let Some(base) = env_opt(ENV_API_BASE_URL) {
        config.api_base_url = base;
    }
    if let Some(raw) = env_opt(ENV_TIMEOUT_SECS) {
        config.timeout_secs = raw
            .parse::<u64>()
            .map_err(|e| ClassBridgeError::Config(format!("Invalid timeout: {}", e)))?;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ClassBridgeError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<SyncConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ClassBridgeError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ClassBridgeError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ClassBridgeError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); files without
/// an extension are read as JSON.
///
/// # Errors
/// Returns `ClassBridgeError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<SyncConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ClassBridgeError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ClassBridgeError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ClassBridgeError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its parents (up to 2 levels) and
/// the executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("classbridge.json"),
        dir.join("classbridge.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `ClassBridgeError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        ClassBridgeError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank counts as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
