//! Zoom REST wire types.
//!
//! The settings block of the create-meeting body encodes booleans as the
//! strings `"true"` and `"False"`; that quirk is confined to this module.

use classbridge_domain::constants::{SCHEDULED_MEETING_TYPE, TRACKING_FIELD_CLASS_ID};
use classbridge_domain::{ClassBridgeError, CreatedMeeting, MeetingDefaults, MeetingRequest, Result};
use serde::{Deserialize, Serialize, Serializer};

/// Body of `POST /users/{host}/meetings`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateMeetingBody<'a> {
    topic: &'a str,
    #[serde(rename = "type")]
    meeting_type: u8,
    start_time: String,
    timezone: &'a str,
    duration: u32,
    agenda: &'a str,
    schedule_for: &'a str,
    recurrence: RecurrenceBody,
    tracking_fields: [TrackingField<'a>; 1],
    settings: SettingsBody<'a>,
}

#[derive(Debug, Serialize)]
struct RecurrenceBody {
    #[serde(rename = "type")]
    kind: u8,
    repeat_interval: u32,
}

#[derive(Debug, Serialize)]
struct TrackingField<'a> {
    field: &'static str,
    value: &'a str,
}

#[derive(Debug, Serialize)]
struct SettingsBody<'a> {
    #[serde(serialize_with = "wire_bool")]
    host_video: bool,
    #[serde(serialize_with = "wire_bool")]
    participant_video: bool,
    #[serde(serialize_with = "wire_bool")]
    join_before_host: bool,
    jbh_time: u32,
    #[serde(serialize_with = "wire_bool")]
    mute_upon_entry: bool,
    #[serde(serialize_with = "wire_bool")]
    watermark: bool,
    audio: &'static str,
    auto_recording: &'static str,
    #[serde(serialize_with = "wire_bool")]
    waiting_room: bool,
    alternative_hosts: &'a str,
    #[serde(serialize_with = "wire_bool")]
    alternative_hosts_email_notification: bool,
}

/// `true` → `"true"`, `false` → `"False"`, as the provider expects.
fn wire_bool<S: Serializer>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "False" })
}

impl<'a> CreateMeetingBody<'a> {
    pub(crate) fn new(request: &'a MeetingRequest, defaults: &MeetingDefaults) -> Self {
        Self {
            topic: &request.topic,
            meeting_type: SCHEDULED_MEETING_TYPE,
            start_time: request.start_time_wire(),
            timezone: request.timezone_name(),
            duration: request.duration_minutes,
            agenda: "",
            schedule_for: "",
            recurrence: RecurrenceBody {
                kind: defaults.recurrence.recurrence_type,
                repeat_interval: defaults.recurrence.repeat_interval,
            },
            tracking_fields: [TrackingField {
                field: TRACKING_FIELD_CLASS_ID,
                value: &request.class_id,
            }],
            settings: SettingsBody {
                host_video: defaults.host_video,
                participant_video: defaults.participant_video,
                join_before_host: defaults.join_before_host,
                jbh_time: defaults.join_before_host_minutes,
                mute_upon_entry: defaults.mute_upon_entry,
                watermark: defaults.watermark,
                audio: defaults.audio,
                auto_recording: defaults.auto_recording,
                waiting_room: defaults.waiting_room,
                alternative_hosts: request.alternate().unwrap_or_default(),
                alternative_hosts_email_notification: defaults
                    .alternative_hosts_email_notification,
            },
        }
    }
}

/// Subset of `GET /users/{id}` the license gate needs.
#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub id: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub user_type: Option<u8>,
}

/// Subset of the create-meeting response that goes into the report.
#[derive(Debug, Deserialize)]
pub(crate) struct MeetingResponse {
    uuid: Option<String>,
    id: Option<u64>,
    start_url: Option<String>,
    join_url: Option<String>,
}

impl MeetingResponse {
    /// Require every reported field, naming the first one missing.
    pub(crate) fn into_created(self) -> Result<CreatedMeeting> {
        fn required<T>(value: Option<T>, field: &str) -> Result<T> {
            value.ok_or_else(|| {
                ClassBridgeError::Provision(format!("response missing field `{field}`"))
            })
        }

        Ok(CreatedMeeting {
            uuid: required(self.uuid, "uuid")?,
            id: required(self.id, "id")?,
            start_url: required(self.start_url, "start_url")?,
            join_url: required(self.join_url, "join_url")?,
        })
    }
}
