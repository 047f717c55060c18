//! Provisioning results and run summaries

use serde::{Deserialize, Serialize};

use crate::types::eligibility::EligibilityVerdict;

/// Identifiers the provider assigns to a freshly created meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedMeeting {
    pub uuid: String,
    pub id: u64,
    pub start_url: String,
    pub join_url: String,
}

/// One report row linking a source class to its provider meeting.
///
/// Field names and order are the report contract shared by every sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisionResult {
    #[serde(rename = "Saba_ID")]
    pub class_id: String,
    #[serde(rename = "Zoom_UUID")]
    pub meeting_uuid: String,
    #[serde(rename = "Zoom_ID")]
    pub meeting_id: u64,
    pub start_url: String,
    pub join_url: String,
}

impl ProvisionResult {
    pub fn new(class_id: impl Into<String>, meeting: CreatedMeeting) -> Self {
        Self {
            class_id: class_id.into(),
            meeting_uuid: meeting.uuid,
            meeting_id: meeting.id,
            start_url: meeting.start_url,
            join_url: meeting.join_url,
        }
    }
}

/// A record whose creation call did not yield a usable meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisionFailure {
    pub class_id: String,
    pub reason: String,
}

/// Per-record results of the provisioning phase, both lists in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub created: Vec<ProvisionResult>,
    pub failed: Vec<ProvisionFailure>,
}

impl ProvisionOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.created.len() + self.failed.len()
    }
}

/// Result of writing the report to one sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SinkReport {
    pub sink: String,
    pub destination: String,
    pub error: Option<String>,
}

impl SinkReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of one synchronisation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncReport {
    pub records_loaded: usize,
    pub verdict: EligibilityVerdict,
    /// `None` when the gate failed or the run was check-only.
    pub outcome: Option<ProvisionOutcome>,
    pub sinks: Vec<SinkReport>,
}

impl SyncReport {
    /// True when every record was provisioned and every sink was written.
    pub fn is_success(&self) -> bool {
        self.verdict.is_eligible()
            && self.outcome.as_ref().map_or(true, ProvisionOutcome::is_complete)
            && self.sinks.iter().all(SinkReport::succeeded)
    }
}
