//! Synchronisation workflow - core business logic

use std::sync::Arc;

use classbridge_domain::{ProvisionResult, Result, SinkReport, SyncReport};
use tracing::{error, info, warn};

use super::ports::{CredentialProvider, ReportSink, ScheduleSource};
use crate::eligibility::{ports::AccountDirectory, EligibilityValidator};
use crate::provisioning::{ports::MeetingScheduler, MeetingProvisioner};

/// One batch run: load → license gate → provision → persist.
///
/// Load and credential failures are returned as errors before any remote
/// mutation. An ineligible batch is not an error: the run stops after the
/// gate and the verdict is returned in the report.
pub struct SyncService {
    source: Arc<dyn ScheduleSource>,
    credentials: Arc<dyn CredentialProvider>,
    validator: EligibilityValidator,
    provisioner: MeetingProvisioner,
    sinks: Vec<Arc<dyn ReportSink>>,
    check_only: bool,
}

impl SyncService {
    /// Create a new sync service
    pub fn new(
        source: Arc<dyn ScheduleSource>,
        credentials: Arc<dyn CredentialProvider>,
        directory: Arc<dyn AccountDirectory>,
        scheduler: Arc<dyn MeetingScheduler>,
    ) -> Self {
        Self {
            source,
            credentials,
            validator: EligibilityValidator::new(directory),
            provisioner: MeetingProvisioner::new(scheduler),
            sinks: Vec::new(),
            check_only: false,
        }
    }

    /// Add a report sink
    pub fn with_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Stop after the license gate without creating anything.
    pub fn check_only(mut self, enabled: bool) -> Self {
        self.check_only = enabled;
        self
    }

    /// Execute the run.
    ///
    /// # Errors
    /// Returns the loader's `Parse` error or the credential provider's error;
    /// both occur before any provider call.
    pub async fn run(&self) -> Result<SyncReport> {
        let requests = self.source.load()?;
        info!(records = requests.len(), "loaded class schedule");

        let mut report = SyncReport { records_loaded: requests.len(), ..SyncReport::default() };

        let credential = self.credentials.credential().await?;
        report.verdict = self.validator.validate(&requests, &credential).await;

        if !report.verdict.is_eligible() {
            for violation in &report.verdict.violations {
                warn!(
                    user = %violation.user,
                    class_id = %violation.class_id,
                    role = %violation.role,
                    reason = %violation.reason,
                    "ineligible presenter"
                );
            }
            warn!("no meetings were created; correct the hosts in the input file and run again");
            return Ok(report);
        }

        if self.check_only {
            info!("check-only run; skipping provisioning");
            return Ok(report);
        }

        let credential = self.credentials.credential().await?;
        let outcome = self.provisioner.provision(&requests, &credential).await;

        report.sinks = self.persist(&outcome.created);
        report.outcome = Some(outcome);
        Ok(report)
    }

    fn persist(&self, results: &[ProvisionResult]) -> Vec<SinkReport> {
        self.sinks
            .iter()
            .map(|sink| {
                let destination = sink.destination();
                match sink.write(results) {
                    Ok(()) => {
                        info!(sink = sink.name(), %destination, rows = results.len(), "report written");
                        SinkReport { sink: sink.name().to_string(), destination, error: None }
                    }
                    Err(err) => {
                        error!(sink = sink.name(), %destination, error = %err, "failed to write report");
                        SinkReport {
                            sink: sink.name().to_string(),
                            destination,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect()
    }
}
