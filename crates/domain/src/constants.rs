//! Application constants
//!
//! Centralized location for provider and export constants used throughout
//! the application.

// Provider API
pub const DEFAULT_API_BASE_URL: &str = "https://api.zoom.us/v2";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("classbridge/", env!("CARGO_PKG_VERSION"));

// Signed credential lifetime
pub const TOKEN_TTL_SECS: u64 = 5000;

// Provider enumerations
pub const LICENSED_TIER_CODE: u8 = 2;
pub const SCHEDULED_MEETING_TYPE: u8 = 2;
pub const DAILY_RECURRENCE_TYPE: u8 = 1;
pub const AUDIO_BOTH: &str = "both";
pub const AUTO_RECORDING_NONE: &str = "none";
pub const TRACKING_FIELD_CLASS_ID: &str = "CLASS_ID";

// Source export columns
pub const COL_CLASS_ID: &str = "CLASS_ID";
pub const COL_TOPIC: &str = "topic";
pub const COL_HOST: &str = "host";
pub const COL_ALTERNATE_HOST: &str = "alternative_host";
pub const COL_START_DATE: &str = "startDate";
pub const COL_START_TIME: &str = "startTime";
pub const COL_LOCATION: &str = "location";
pub const COL_DURATION: &str = "duration";

pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_CLASS_ID,
    COL_TOPIC,
    COL_HOST,
    COL_ALTERNATE_HOST,
    COL_START_DATE,
    COL_START_TIME,
    COL_LOCATION,
    COL_DURATION,
];

// Report columns, in output order
pub const REPORT_COLUMNS: [&str; 5] = ["Saba_ID", "Zoom_UUID", "Zoom_ID", "start_url", "join_url"];

// Date/time pattern of the export (`01-Jan-2024 09:00:00 AM`)
pub const EXPORT_DATETIME_FORMAT: &str = "%d-%b-%Y %I:%M:%S %p";
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
