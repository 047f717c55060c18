//! Domain utilities

pub mod schedule_parser;
