//! Class-schedule sources

pub mod csv_source;

pub use csv_source::{parse_schedule, CsvScheduleSource};
