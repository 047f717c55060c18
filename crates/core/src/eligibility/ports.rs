//! Port interfaces for account lookup

use async_trait::async_trait;
use classbridge_domain::{ProviderAccount, Result};

/// Provider-side account directory
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Look up an account by provider identifier (email or user id).
    ///
    /// Unknown accounts surface as `ClassBridgeError::NotFound`.
    async fn lookup_account(&self, user_id: &str, credential: &str) -> Result<ProviderAccount>;
}
