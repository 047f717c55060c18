//! Remote meeting creation

pub mod ports;
pub mod service;

pub use service::MeetingProvisioner;
