//! License gate over a whole batch

use std::sync::Arc;

use classbridge_domain::{
    EligibilityVerdict, EligibilityViolation, HostRole, IneligibilityReason, MeetingRequest,
};
use tracing::{info, warn};

use super::ports::AccountDirectory;

/// Confirms that every presenter in a batch holds a licensed account.
///
/// Hosts are checked first, in input order, then alternate hosts. A failed
/// lookup marks the account ineligible and the pass continues; the verdict
/// is only eligible when no check failed.
pub struct EligibilityValidator {
    directory: Arc<dyn AccountDirectory>,
}

impl EligibilityValidator {
    pub fn new(directory: Arc<dyn AccountDirectory>) -> Self {
        Self { directory }
    }

    /// Check every host and every present alternate host.
    pub async fn validate(
        &self,
        requests: &[MeetingRequest],
        credential: &str,
    ) -> EligibilityVerdict {
        let mut verdict = EligibilityVerdict::default();

        info!(records = requests.len(), "checking hosts for licensed accounts");
        for request in requests {
            self.check_account(&mut verdict, &request.host, request, HostRole::Host, credential)
                .await;
        }

        for request in requests {
            match request.alternate() {
                Some(alternate) => {
                    self.check_account(
                        &mut verdict,
                        alternate,
                        request,
                        HostRole::AlternateHost,
                        credential,
                    )
                    .await;
                }
                None => info!(class_id = %request.class_id, "no alternate host"),
            }
        }

        if verdict.is_eligible() {
            info!(checked = verdict.checked, "all presenters hold licensed accounts");
        } else {
            warn!(
                checked = verdict.checked,
                violations = verdict.violations.len(),
                "batch is not eligible for provisioning"
            );
        }

        verdict
    }

    async fn check_account(
        &self,
        verdict: &mut EligibilityVerdict,
        user: &str,
        request: &MeetingRequest,
        role: HostRole,
        credential: &str,
    ) {
        let reason = match self.directory.lookup_account(user, credential).await {
            Ok(account) if account.tier.is_licensed() => {
                info!(user, class_id = %request.class_id, %role, "account is licensed");
                verdict.record_pass();
                return;
            }
            Ok(account) => IneligibilityReason::Unlicensed { tier: account.tier },
            Err(err) => IneligibilityReason::LookupFailed(err.to_string()),
        };

        warn!(user, class_id = %request.class_id, %role, %reason, "account is not eligible to host");
        verdict.record_violation(EligibilityViolation {
            user: user.to_string(),
            class_id: request.class_id.clone(),
            role,
            reason,
        });
    }
}
