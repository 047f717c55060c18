//! Presenter license gate

pub mod ports;
pub mod service;

pub use service::EligibilityValidator;
