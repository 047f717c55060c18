//! Zoom integration
//!
//! REST adapter for the account directory and meeting scheduler ports,
//! plus the bearer credential providers.

pub mod auth;
pub mod client;
mod types;

pub use auth::{credential_provider_from_config, SignedTokenProvider, StaticCredentialProvider};
pub use client::ZoomClient;
