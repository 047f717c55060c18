/// Zoom REST client for account lookup and meeting creation
use std::time::Duration;

use async_trait::async_trait;
use classbridge_core::{AccountDirectory, MeetingScheduler};
use classbridge_domain::{
    ClassBridgeError, CreatedMeeting, LicenseTier, MeetingDefaults, MeetingRequest,
    ProviderAccount, Result, SyncConfig,
};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{CreateMeetingBody, MeetingResponse, UserResponse};
use crate::http::HttpClient;

/// Client for the two provider endpoints the workflow uses.
///
/// Credentials are passed per call; the client itself holds no secrets.
pub struct ZoomClient {
    base_url: Url,
    http_client: HttpClient,
}

impl ZoomClient {
    /// Create a client rooted at `base_url` (e.g. `https://api.zoom.us/v2`).
    ///
    /// # Errors
    /// Returns `ClassBridgeError::Config` when the base URL is not an
    /// absolute http(s) URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ClassBridgeError::Config(format!("invalid apiBaseUrl '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClassBridgeError::Config(format!(
                "apiBaseUrl '{base_url}' cannot carry a path"
            )));
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self { base_url, http_client })
    }

    /// Create a client from the run configuration.
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        Self::new(config.api_base(), Duration::from_secs(config.timeout_secs))
    }

    /// `{base}/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClassBridgeError::Internal("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        credential: &str,
        body: Option<&CreateMeetingBody<'_>>,
    ) -> Result<T> {
        let mut request_builder = self
            .http_client
            .request(method, url.clone())
            .header("Authorization", format!("Bearer {}", credential))
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request_builder = request_builder.json(body);
        }

        let response = self.http_client.send(request_builder).await?;

        let status = response.status();
        debug!(status = status.as_u16(), %url, "Received Zoom response");

        if !status.is_success() {
            return Err(status_error(status, &url, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            ClassBridgeError::InvalidInput(format!("Failed to parse Zoom response: {}", e))
        })
    }
}

/// Map a non-success response to a typed error, keeping the provider's body
/// text for the log.
async fn status_error(status: StatusCode, url: &Url, response: Response) -> ClassBridgeError {
    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    let message = format!("Zoom API error (HTTP {}) for {}: {}", status, url.path(), error_text);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClassBridgeError::Auth(message),
        StatusCode::NOT_FOUND => ClassBridgeError::NotFound(message),
        _ => ClassBridgeError::Network(message),
    }
}

#[async_trait]
impl AccountDirectory for ZoomClient {
    async fn lookup_account(&self, user_id: &str, credential: &str) -> Result<ProviderAccount> {
        let url = self.endpoint(&["users", user_id])?;
        let user: UserResponse = self.execute(Method::GET, url, credential, None).await?;

        let code = user.user_type.ok_or_else(|| {
            ClassBridgeError::InvalidInput(format!("user '{user_id}' response has no `type`"))
        })?;

        Ok(ProviderAccount {
            id: user.id.unwrap_or_else(|| user_id.to_string()),
            email: user.email,
            tier: LicenseTier::from_code(code),
        })
    }
}

#[async_trait]
impl MeetingScheduler for ZoomClient {
    async fn create_meeting(
        &self,
        request: &MeetingRequest,
        defaults: &MeetingDefaults,
        credential: &str,
    ) -> Result<CreatedMeeting> {
        let url = self.endpoint(&["users", &request.host, "meetings"])?;
        let body = CreateMeetingBody::new(request, defaults);

        let response: MeetingResponse =
            self.execute(Method::POST, url, credential, Some(&body)).await?;
        let meeting = response.into_created()?;

        debug!(class_id = %request.class_id, meeting_id = meeting.id, "Zoom meeting created");
        Ok(meeting)
    }
}
