//! # ClassBridge Domain
//!
//! Business domain types and models for ClassBridge.
//!
//! This crate contains:
//! - Meeting request, eligibility and provisioning result types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Schedule parsing helpers (date/time composition, timezone resolution)
//!
//! ## Architecture
//! - No dependencies on other ClassBridge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::schedule_parser::{
    compose_start_time, optional_account, parse_duration, resolve_timezone,
};
