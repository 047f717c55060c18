//! # ClassBridge Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (files and environment)
//! - HTTP client
//! - The Zoom REST adapter and bearer credential providers
//! - The CSV class-schedule source
//! - JSON and CSV report sinks
//!
//! ## Architecture
//! - Implements traits defined in `classbridge-core`
//! - Contains all "impure" code (file, network and clock access)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod reports;
pub mod schedule;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::zoom::{
    credential_provider_from_config, SignedTokenProvider, StaticCredentialProvider, ZoomClient,
};
pub use reports::{report_sinks_from_config, CsvReportSink, JsonReportSink};
pub use schedule::{parse_schedule, CsvScheduleSource};
