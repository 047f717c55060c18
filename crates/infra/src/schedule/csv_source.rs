//! CSV class-schedule loader.
//!
//! Reads the LMS export (`CLASS_ID, topic, host, alternative_host,
//! startDate, startTime, location, duration`) into meeting requests. The
//! load is all-or-nothing: the first bad row fails it.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use classbridge_core::ScheduleSource;
use classbridge_domain::constants::{
    COL_ALTERNATE_HOST, COL_CLASS_ID, COL_DURATION, COL_HOST, COL_LOCATION, COL_START_DATE,
    COL_START_TIME, COL_TOPIC, REQUIRED_COLUMNS,
};
use classbridge_domain::{
    compose_start_time, optional_account, parse_duration, resolve_timezone, ClassBridgeError,
    MeetingRequest, Result,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Schedule source backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvScheduleSource {
    path: PathBuf,
}

impl CsvScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for CsvScheduleSource {
    fn load(&self) -> Result<Vec<MeetingRequest>> {
        let file = File::open(&self.path).map_err(|e| {
            ClassBridgeError::Config(format!(
                "cannot open input file {}: {e}",
                self.path.display()
            ))
        })?;
        debug!(path = %self.path.display(), "reading class schedule");
        parse_schedule(file)
    }
}

/// Column positions resolved from the header row.
struct Columns {
    class_id: usize,
    topic: usize,
    host: usize,
    alternate_host: usize,
    start_date: usize,
    start_time: usize,
    location: usize,
    duration: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(ClassBridgeError::Parse(format!(
                "input header is missing column(s): {}",
                missing.join(", ")
            )));
        }

        let index = |column: &str| headers.iter().position(|h| h == column).unwrap_or_default();
        Ok(Self {
            class_id: index(COL_CLASS_ID),
            topic: index(COL_TOPIC),
            host: index(COL_HOST),
            alternate_host: index(COL_ALTERNATE_HOST),
            start_date: index(COL_START_DATE),
            start_time: index(COL_START_TIME),
            location: index(COL_LOCATION),
            duration: index(COL_DURATION),
        })
    }
}

/// Parse a whole export from any reader.
///
/// # Errors
/// Returns `ClassBridgeError::Parse` naming the line (and class id when
/// known) of the first row that is short, has an empty class id or host, or
/// carries an unparseable start or duration.
pub fn parse_schedule<R: Read>(reader: R) -> Result<Vec<MeetingRequest>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| ClassBridgeError::from(InfraError::from(e)))?;
    let columns = Columns::from_headers(headers)?;

    let mut requests = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| ClassBridgeError::from(InfraError::from(e)))?;
        let line = record.position().map_or(0, csv::Position::line);
        requests.push(parse_row(&record, &columns, line)?);
    }

    Ok(requests)
}

fn parse_row(record: &StringRecord, columns: &Columns, line: u64) -> Result<MeetingRequest> {
    let field = |index: usize| record.get(index).unwrap_or_default();
    let row_error = |message: String| {
        let class_id = field(columns.class_id);
        if class_id.is_empty() {
            ClassBridgeError::Parse(format!("line {line}: {message}"))
        } else {
            ClassBridgeError::Parse(format!("line {line} (CLASS_ID {class_id}): {message}"))
        }
    };

    let class_id = field(columns.class_id);
    if class_id.is_empty() {
        return Err(row_error("CLASS_ID is empty".into()));
    }
    let host = field(columns.host);
    if host.is_empty() {
        return Err(row_error("host is empty".into()));
    }

    let start_time = compose_start_time(field(columns.start_date), field(columns.start_time))
        .map_err(|e| row_error(detail(e)))?;
    let duration_minutes =
        parse_duration(field(columns.duration)).map_err(|e| row_error(detail(e)))?;

    let location = field(columns.location);
    let timezone = resolve_timezone(location);
    if timezone.is_none() {
        warn!(line, class_id, location, "location names no known region; timezone left unset");
    }

    Ok(MeetingRequest {
        class_id: class_id.to_string(),
        topic: field(columns.topic).to_string(),
        host: host.to_string(),
        alternate_host: optional_account(field(columns.alternate_host)),
        start_time,
        duration_minutes,
        timezone,
    })
}

/// Message of a field-level parse error, without the variant prefix.
fn detail(error: ClassBridgeError) -> String {
    match error {
        ClassBridgeError::Parse(message) => message,
        other => other.to_string(),
    }
}
