//! External service integrations

pub mod zoom;
