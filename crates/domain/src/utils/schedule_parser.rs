//! Class-schedule field parsing.
//!
//! Turns the loosely formatted cells of the LMS export into typed values:
//! the start instant (date cell + time cell), the IANA timezone (from the
//! region word of the location) and the duration.

use chrono::NaiveDateTime;
use chrono_tz::Tz;

use crate::constants::EXPORT_DATETIME_FORMAT;
use crate::errors::{ClassBridgeError, Result};

/// Region words recognised in the second token of a location.
const REGION_TIMEZONES: [(&str, Tz); 4] = [
    ("Eastern", chrono_tz::America::New_York),
    ("Central", chrono_tz::America::Chicago),
    ("Mountain", chrono_tz::America::Denver),
    ("Pacific", chrono_tz::America::Los_Angeles),
];

/// Resolve the timezone from a location such as `"Room Eastern"`.
///
/// The region is the second whitespace-separated token; locations with a
/// multi-word room name (`"Room A Eastern"`) carry it in the last token
/// instead. Unknown regions and single-token locations resolve to `None`.
pub fn resolve_timezone(location: &str) -> Option<Tz> {
    let tokens: Vec<&str> = location.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    region_timezone(tokens[1]).or_else(|| tokens.last().copied().and_then(region_timezone))
}

fn region_timezone(region: &str) -> Option<Tz> {
    REGION_TIMEZONES.iter().find(|(name, _)| *name == region).map(|(_, tz)| *tz)
}

/// Combine the `startDate` cell (`01-Jan-2024`) with the time component of
/// the `startTime` cell (`09:00:00 AM`) into one local timestamp.
///
/// The time component is the last two tokens of the cell, so exports that
/// repeat the date in `startTime` parse the same way.
///
/// # Errors
/// Returns `ClassBridgeError::Parse` when the cell has fewer than two tokens
/// or the combined value does not match `%d-%b-%Y %I:%M:%S %p`.
pub fn compose_start_time(start_date: &str, start_time: &str) -> Result<NaiveDateTime> {
    let tokens: Vec<&str> = start_time.split_whitespace().collect();
    let [.., clock, meridiem] = tokens.as_slice() else {
        return Err(ClassBridgeError::Parse(format!(
            "startTime '{start_time}' must contain a time and an AM/PM marker"
        )));
    };

    let combined = format!("{} {clock} {meridiem}", start_date.trim());
    NaiveDateTime::parse_from_str(&combined, EXPORT_DATETIME_FORMAT).map_err(|e| {
        ClassBridgeError::Parse(format!(
            "invalid start '{combined}' (expected DD-Mon-YYYY HH:MM:SS AM/PM): {e}"
        ))
    })
}

/// Parse a positive meeting duration in minutes.
///
/// # Errors
/// Returns `ClassBridgeError::Parse` for non-numeric or zero values.
pub fn parse_duration(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(0) => Err(ClassBridgeError::Parse("duration must be greater than zero".into())),
        Ok(minutes) => Ok(minutes),
        Err(e) => Err(ClassBridgeError::Parse(format!("invalid duration '{trimmed}': {e}"))),
    }
}

/// Normalise an optional account cell; blank means "none".
pub fn optional_account(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
