//! Port interfaces for the run workflow
//!
//! These traits define the boundaries between the workflow and the
//! infrastructure that reads the export, mints credentials and writes
//! reports.

use async_trait::async_trait;
use classbridge_domain::{MeetingRequest, ProvisionResult, Result};

/// Source of the batch of meeting requests
pub trait ScheduleSource: Send + Sync {
    /// Load every record, in input order.
    ///
    /// Any malformed row fails the whole load; no partial batch is returned.
    fn load(&self) -> Result<Vec<MeetingRequest>>;
}

/// Supplies bearer credentials for provider calls
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Return a credential valid for the next provider call(s).
    async fn credential(&self) -> Result<String>;
}

/// Durable destination for the provisioning report
pub trait ReportSink: Send + Sync {
    /// Short sink label used in logs (`json`, `csv`).
    fn name(&self) -> &str;

    /// Human-readable destination (usually a path).
    fn destination(&self) -> String;

    /// Persist every row, replacing any previous content.
    fn write(&self, results: &[ProvisionResult]) -> Result<()>;
}
