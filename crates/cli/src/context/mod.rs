//! Application context - dependency wiring for one run

use std::path::PathBuf;
use std::sync::Arc;

use classbridge_core::SyncService;
use classbridge_domain::{Result, SyncConfig, SyncReport};
use classbridge_infra::{
    credential_provider_from_config, report_sinks_from_config, CsvScheduleSource, ZoomClient,
};
use tracing::info;

/// Holds the validated configuration and the fully wired workflow.
pub struct AppContext {
    pub config: SyncConfig,
    service: SyncService,
}

impl AppContext {
    /// Load configuration (explicit path, environment, then probed file) and
    /// wire the adapters.
    ///
    /// # Errors
    /// Returns `ClassBridgeError::Config` before any I/O against the provider
    /// when the configuration is missing or incomplete.
    pub fn load(config_path: Option<PathBuf>, check_only: bool) -> Result<Self> {
        let config = classbridge_infra::config::load(config_path)?;
        Self::new(config, check_only)
    }

    /// Wire the adapters for an already loaded configuration.
    pub fn new(config: SyncConfig, check_only: bool) -> Result<Self> {
        config.validate()?;

        let credentials = credential_provider_from_config(&config)?;
        let zoom = Arc::new(ZoomClient::from_config(&config)?);
        let source = Arc::new(CsvScheduleSource::new(&config.input_file));

        let sinks = report_sinks_from_config(&config);
        info!(
            input = %config.input_file.display(),
            api = config.api_base(),
            sinks = sinks.len(),
            check_only,
            "application context initialised"
        );

        let service = sinks
            .into_iter()
            .fold(SyncService::new(source, credentials, zoom.clone(), zoom), SyncService::with_sink)
            .check_only(check_only);

        Ok(Self { config, service })
    }

    /// Execute the run.
    pub async fn run(&self) -> Result<SyncReport> {
        self.service.run().await
    }
}
