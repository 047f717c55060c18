//! Bearer credential providers.
//!
//! Either a pre-issued token is used verbatim, or a short-lived HS256 token
//! is signed from the API key and secret on every request for a credential.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use classbridge_core::CredentialProvider;
use classbridge_domain::constants::TOKEN_TTL_SECS;
use classbridge_domain::{ClassBridgeError, CredentialSource, Result, SyncConfig};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::InfraError;

/// JWT claims accepted by the provider.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Issuer (API key).
    iss: String,
    /// Expiration timestamp (seconds since epoch).
    exp: u64,
}

/// Returns the configured token as-is.
pub struct StaticCredentialProvider {
    token: String,
}

impl StaticCredentialProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn credential(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Signs a fresh token on every call. Nothing is cached.
pub struct SignedTokenProvider {
    api_key: String,
    encoding_key: EncodingKey,
    ttl_secs: u64,
}

impl SignedTokenProvider {
    pub fn new(api_key: impl Into<String>, api_secret: &str) -> Self {
        Self {
            api_key: api_key.into(),
            encoding_key: EncodingKey::from_secret(api_secret.as_bytes()),
            ttl_secs: TOKEN_TTL_SECS,
        }
    }

    fn sign(&self) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClassBridgeError::Internal(format!("System time error: {e}")))?;

        let exp = now.as_secs() + self.ttl_secs;
        let claims = Claims { iss: self.api_key.clone(), exp };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ClassBridgeError::from(InfraError::from(e)))?;

        debug!(exp, "Signed provider token");
        Ok(token)
    }
}

#[async_trait]
impl CredentialProvider for SignedTokenProvider {
    async fn credential(&self) -> Result<String> {
        self.sign()
    }
}

/// Pick the credential provider the configuration asks for.
///
/// # Errors
/// Returns `ClassBridgeError::Config` when neither a bearer token nor both
/// signing values are configured.
pub fn credential_provider_from_config(config: &SyncConfig) -> Result<Arc<dyn CredentialProvider>> {
    Ok(match config.credential_source()? {
        CredentialSource::PreIssued(token) => Arc::new(StaticCredentialProvider::new(token)),
        CredentialSource::Signed { api_key, api_secret } => {
            Arc::new(SignedTokenProvider::new(api_key, &api_secret))
        }
    })
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    use super::*;

    #[tokio::test]
    async fn static_provider_returns_token_verbatim() {
        let provider = StaticCredentialProvider::new("pre-issued");
        assert_eq!(provider.credential().await.unwrap(), "pre-issued");
    }

    #[tokio::test]
    async fn signed_token_carries_issuer_and_expiry() {
        let provider = SignedTokenProvider::new("my-key", "my-secret");
        let before = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();

        let token = provider.credential().await.unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "iss"]);
        let decoded =
            decode::<Claims>(&token, &DecodingKey::from_secret(b"my-secret"), &validation).unwrap();

        assert_eq!(decoded.header.alg, Algorithm::HS256);
        assert_eq!(decoded.claims.iss, "my-key");
        assert!(decoded.claims.exp >= before + TOKEN_TTL_SECS);
        assert!(decoded.claims.exp <= before + TOKEN_TTL_SECS + 5);
    }

    #[tokio::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let token = SignedTokenProvider::new("my-key", "my-secret").credential().await.unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"wrong"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn bearer_token_wins_over_signing_material() {
        let mut config = SyncConfig::new("classes.csv");
        config.bearer_token = Some("pre-issued".into());
        config.api_key = Some("key".into());
        config.api_secret = Some("secret".into());

        let provider = credential_provider_from_config(&config).unwrap();

        assert_eq!(provider.credential().await.unwrap(), "pre-issued");
    }

    #[test]
    fn missing_secret_fails_at_construction() {
        let mut config = SyncConfig::new("classes.csv");
        config.api_key = Some("key".into());

        let result = credential_provider_from_config(&config);

        assert!(matches!(result, Err(ClassBridgeError::Config(_))));
    }
}
