//! Conversions from external infrastructure errors into domain errors.

use classbridge_domain::ClassBridgeError;
use csv::Error as CsvError;
use jsonwebtoken::errors::Error as JwtError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClassBridgeError);

impl From<InfraError> for ClassBridgeError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClassBridgeError> for InfraError {
    fn from(value: ClassBridgeError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoClassBridgeError {
    fn into_classbridge(self) -> ClassBridgeError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClassBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoClassBridgeError for HttpError {
    fn into_classbridge(self) -> ClassBridgeError {
        if self.is_timeout() {
            return ClassBridgeError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ClassBridgeError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => ClassBridgeError::Auth(message),
                404 => ClassBridgeError::NotFound(message),
                400..=499 => ClassBridgeError::InvalidInput(message),
                _ => ClassBridgeError::Network(message),
            };
        }

        if self.is_decode() {
            return ClassBridgeError::InvalidInput(format!("malformed HTTP response body: {self}"));
        }

        ClassBridgeError::Network(format!("HTTP request failed: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_classbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → ClassBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoClassBridgeError for CsvError {
    fn into_classbridge(self) -> ClassBridgeError {
        let line = self.position().map(|pos| pos.line());
        match self.kind() {
            csv::ErrorKind::Io(err) => ClassBridgeError::Persistence(format!("CSV I/O error: {err}")),
            _ => match line {
                Some(line) => ClassBridgeError::Parse(format!("CSV line {line}: {self}")),
                None => ClassBridgeError::Parse(format!("CSV error: {self}")),
            },
        }
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        InfraError(value.into_classbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* jsonwebtoken::Error → ClassBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoClassBridgeError for JwtError {
    fn into_classbridge(self) -> ClassBridgeError {
        use jsonwebtoken::errors::ErrorKind;

        match self.kind() {
            ErrorKind::InvalidKeyFormat | ErrorKind::InvalidAlgorithm => {
                ClassBridgeError::Config(format!("signing key rejected: {self}"))
            }
            _ => ClassBridgeError::Auth(format!("failed to sign token: {self}")),
        }
    }
}

impl From<JwtError> for InfraError {
    fn from(value: JwtError) -> Self {
        InfraError(value.into_classbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ClassBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoClassBridgeError for serde_json::Error {
    fn into_classbridge(self) -> ClassBridgeError {
        if self.is_io() {
            return ClassBridgeError::Persistence(format!("JSON I/O error: {self}"));
        }
        ClassBridgeError::InvalidInput(format!("invalid JSON: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_classbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ClassBridgeError */
/* -------------------------------------------------------------------------- */

impl IntoClassBridgeError for std::io::Error {
    fn into_classbridge(self) -> ClassBridgeError {
        ClassBridgeError::Persistence(self.to_string())
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_classbridge())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
