//! Port interfaces for meeting creation

use async_trait::async_trait;
use classbridge_domain::{CreatedMeeting, MeetingDefaults, MeetingRequest, Result};

/// Provider endpoint that creates scheduled meetings
#[async_trait]
pub trait MeetingScheduler: Send + Sync {
    /// Create one meeting for `request` under its host's account.
    ///
    /// Implementations return an error for non-success responses and for
    /// bodies missing any of the meeting identifiers.
    async fn create_meeting(
        &self,
        request: &MeetingRequest,
        defaults: &MeetingDefaults,
        credential: &str,
    ) -> Result<CreatedMeeting>;
}
