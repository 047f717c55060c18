//! Run configuration
//!
//! A single immutable [`SyncConfig`] is built once at startup and handed to
//! every component by reference. Field names on the wire match the legacy
//! `config.json` layout (`API_KEY`, `inputFile`, ...).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::errors::{ClassBridgeError, Result};

/// Configuration for one synchronisation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncConfig {
    /// Pre-issued bearer credential; signing is skipped when non-empty.
    #[serde(rename = "bearerToken", default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// Signing issuer.
    #[serde(rename = "API_KEY", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Signing secret.
    #[serde(rename = "API_SEC", default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    /// Class-schedule export to read.
    #[serde(rename = "inputFile", default)]
    pub input_file: PathBuf,
    /// Structured (JSON) report destination.
    #[serde(
        rename = "outputFileJSON",
        alias = "outputFile",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output_file_json: Option<PathBuf>,
    /// Tabular (CSV) report destination.
    #[serde(rename = "outputFileCSV", default, skip_serializing_if = "Option::is_none")]
    pub output_file_csv: Option<PathBuf>,
    /// Provider REST base URL, without trailing slash.
    #[serde(rename = "apiBaseUrl", default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request HTTP timeout.
    #[serde(rename = "timeoutSecs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

/// Where the bearer credential comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Use the configured token verbatim.
    PreIssued(String),
    /// Mint a short-lived signed token per call.
    Signed { api_key: String, api_secret: String },
}

impl SyncConfig {
    /// Minimal configuration pointing at `input_file`, with provider defaults.
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            bearer_token: None,
            api_key: None,
            api_secret: None,
            input_file: input_file.into(),
            output_file_json: None,
            output_file_csv: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Check that the configuration can drive a run.
    ///
    /// # Errors
    /// Returns `ClassBridgeError::Config` when the input file is unset or no
    /// usable credential material is present.
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(ClassBridgeError::Config("inputFile is required".into()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ClassBridgeError::Config("apiBaseUrl must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ClassBridgeError::Config("timeoutSecs must be greater than zero".into()));
        }
        self.credential_source().map(|_| ())
    }

    /// Resolve the credential strategy.
    ///
    /// A non-empty `bearerToken` wins; otherwise both `API_KEY` and `API_SEC`
    /// must be present.
    ///
    /// # Errors
    /// Returns `ClassBridgeError::Config` when neither option is usable.
    pub fn credential_source(&self) -> Result<CredentialSource> {
        if let Some(token) = non_empty(self.bearer_token.as_deref()) {
            return Ok(CredentialSource::PreIssued(token.to_string()));
        }

        match (non_empty(self.api_key.as_deref()), non_empty(self.api_secret.as_deref())) {
            (Some(key), Some(secret)) => Ok(CredentialSource::Signed {
                api_key: key.to_string(),
                api_secret: secret.to_string(),
            }),
            (None, _) => Err(ClassBridgeError::Config(
                "API_KEY is required when no bearerToken is configured".into(),
            )),
            (Some(_), None) => Err(ClassBridgeError::Config(
                "API_SEC is required when no bearerToken is configured".into(),
            )),
        }
    }

    /// JSON report destination, if configured and non-empty.
    pub fn json_report_path(&self) -> Option<&Path> {
        non_empty_path(self.output_file_json.as_deref())
    }

    /// CSV report destination, if configured and non-empty.
    pub fn csv_report_path(&self) -> Option<&Path> {
        non_empty_path(self.output_file_csv.as_deref())
    }

    /// Base URL with any trailing slash removed.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn non_empty_path(value: Option<&Path>) -> Option<&Path> {
    value.filter(|p| !p.as_os_str().is_empty())
}
