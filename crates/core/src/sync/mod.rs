//! Run workflow: load, gate, provision, persist

pub mod ports;
pub mod service;

pub use service::SyncService;
