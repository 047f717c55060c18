//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ClassBridge
///
/// Variants follow the run taxonomy: `Config` and `Parse` stop a run before
/// any remote call, the rest are reported per account, record or sink. An
/// ineligible batch is not an error; it is carried by the verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ClassBridgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Provisioning error: {0}")]
    Provision(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClassBridgeError {
    /// Whether the error must stop the process before remote effects occur.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Parse(_))
    }

    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Parse(_) => "parse",
            Self::Provision(_) => "provision",
            Self::Persistence(_) => "persistence",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for ClassBridge operations
pub type Result<T> = std::result::Result<T, ClassBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_config_and_parse_are_fatal() {
        assert!(ClassBridgeError::Config("x".into()).is_fatal());
        assert!(ClassBridgeError::Parse("x".into()).is_fatal());
        assert!(!ClassBridgeError::Provision("x".into()).is_fatal());
        assert!(!ClassBridgeError::Persistence("x".into()).is_fatal());
        assert!(!ClassBridgeError::Network("x".into()).is_fatal());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(ClassBridgeError::NotFound("user bob".into())).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "user bob");
    }
}
