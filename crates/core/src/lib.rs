//! # ClassBridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the provider, credentials, the
//!   schedule export and report sinks
//! - The license gate (`EligibilityValidator`)
//! - Per-record meeting creation (`MeetingProvisioner`)
//! - The run workflow tying them together (`SyncService`)
//!
//! ## Architecture Principles
//! - Only depends on `classbridge-domain`
//! - No file, HTTP or clock access
//! - All external dependencies via traits

pub mod eligibility;
pub mod provisioning;
pub mod sync;

pub use eligibility::ports::AccountDirectory;
pub use eligibility::EligibilityValidator;
pub use provisioning::ports::MeetingScheduler;
pub use provisioning::MeetingProvisioner;
pub use sync::ports::{CredentialProvider, ReportSink, ScheduleSource};
pub use sync::SyncService;
