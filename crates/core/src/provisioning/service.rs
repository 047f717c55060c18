//! Sequential per-record provisioning

use std::sync::Arc;

use classbridge_domain::{
    MeetingDefaults, MeetingRequest, ProvisionFailure, ProvisionOutcome, ProvisionResult,
};
use tracing::{error, info};

use super::ports::MeetingScheduler;

/// Issues one creation call per record, strictly in input order.
///
/// Every record is attempted. A failed call is recorded against its class id
/// and the loop moves on, so meetings created earlier in the batch always
/// reach the report.
pub struct MeetingProvisioner {
    scheduler: Arc<dyn MeetingScheduler>,
    defaults: MeetingDefaults,
}

impl MeetingProvisioner {
    pub fn new(scheduler: Arc<dyn MeetingScheduler>) -> Self {
        Self { scheduler, defaults: MeetingDefaults::default() }
    }

    /// Create a meeting for every request.
    pub async fn provision(
        &self,
        requests: &[MeetingRequest],
        credential: &str,
    ) -> ProvisionOutcome {
        let mut outcome = ProvisionOutcome::default();

        for request in requests {
            match self.scheduler.create_meeting(request, &self.defaults, credential).await {
                Ok(meeting) => {
                    info!(
                        class_id = %request.class_id,
                        meeting_id = meeting.id,
                        host = %request.host,
                        "created meeting"
                    );
                    outcome.created.push(ProvisionResult::new(request.class_id.clone(), meeting));
                }
                Err(err) => {
                    error!(
                        class_id = %request.class_id,
                        host = %request.host,
                        error = %err,
                        "failed to create meeting"
                    );
                    outcome.failed.push(ProvisionFailure {
                        class_id: request.class_id.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(
            created = outcome.created.len(),
            failed = outcome.failed.len(),
            "provisioning finished"
        );
        outcome
    }
}
