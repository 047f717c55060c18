//! Meeting request types
//!
//! One [`MeetingRequest`] per class row of the export. Provisioning settings
//! that never vary per record live in [`MeetingDefaults`].

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AUDIO_BOTH, AUTO_RECORDING_NONE, DAILY_RECURRENCE_TYPE, WIRE_DATETIME_FORMAT,
};

/// A class to be provisioned as a remote meeting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingRequest {
    /// Source-system primary key; the join key into the report.
    pub class_id: String,
    pub topic: String,
    /// Provider account identifier of the presenter.
    pub host: String,
    pub alternate_host: Option<String>,
    /// Local to `timezone`.
    pub start_time: NaiveDateTime,
    pub duration_minutes: u32,
    /// `None` when the location did not name a known region.
    pub timezone: Option<Tz>,
}

impl MeetingRequest {
    /// IANA zone name, or the empty string when unset.
    pub fn timezone_name(&self) -> &'static str {
        self.timezone.map(|tz| tz.name()).unwrap_or_default()
    }

    /// Start time in the provider's local-time wire format.
    pub fn start_time_wire(&self) -> String {
        self.start_time.format(WIRE_DATETIME_FORMAT).to_string()
    }

    /// Alternate host, if any, as a borrowed string.
    pub fn alternate(&self) -> Option<&str> {
        self.alternate_host.as_deref()
    }
}

/// Recurrence attached to every created meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    /// Provider recurrence code; `1` is daily.
    pub recurrence_type: u8,
    pub repeat_interval: u32,
}

/// Fixed provisioning settings applied to every meeting in a batch.
///
/// The daily recurrence is carried over from the existing export workflow
/// even for single-occurrence classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingDefaults {
    pub recurrence: Recurrence,
    pub host_video: bool,
    pub participant_video: bool,
    pub join_before_host: bool,
    pub join_before_host_minutes: u32,
    pub mute_upon_entry: bool,
    pub watermark: bool,
    pub audio: &'static str,
    pub auto_recording: &'static str,
    pub waiting_room: bool,
    pub alternative_hosts_email_notification: bool,
}

impl Default for MeetingDefaults {
    fn default() -> Self {
        Self {
            recurrence: Recurrence { recurrence_type: DAILY_RECURRENCE_TYPE, repeat_interval: 1 },
            host_video: true,
            participant_video: true,
            join_before_host: false,
            join_before_host_minutes: 5,
            mute_upon_entry: false,
            watermark: true,
            audio: AUDIO_BOTH,
            auto_recording: AUTO_RECORDING_NONE,
            waiting_room: false,
            alternative_hosts_email_notification: false,
        }
    }
}
