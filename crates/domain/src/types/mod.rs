//! Domain types and models

pub mod eligibility;
pub mod meeting;
pub mod report;

pub use eligibility::{
    EligibilityVerdict, EligibilityViolation, HostRole, IneligibilityReason, LicenseTier,
    ProviderAccount,
};
pub use meeting::{MeetingDefaults, MeetingRequest, Recurrence};
pub use report::{
    CreatedMeeting, ProvisionFailure, ProvisionOutcome, ProvisionResult, SinkReport, SyncReport,
};
