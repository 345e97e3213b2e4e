//! HTTP client for the KogniTerm server.
//!
//! One instance is built at startup and shared by every `send_message` and
//! `check_server_status` call. The server runs on the user's machine, so the
//! client ignores system proxy settings.

use std::time::Duration;

use reqwest::Client as HttpClient;

use super::errors::ApiError;
use super::types::{ChatRequest, ChatResponse};
use crate::config::DesktopConfig;

// ─── Constants ───────────────────────────────────────────────────────────────

/// Timeout for the health probe. Kept short so the status indicator never lags.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);

/// Maximum number of body bytes copied into an `HttpError`.
const MAX_ERROR_BODY: usize = 512;

// ─── ApiClient ───────────────────────────────────────────────────────────────

/// Client for the KogniTerm server's `/api` routes.
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` (e.g. `http://localhost:8000`).
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .no_proxy()
            .build()
            .map_err(|e| ApiError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the loaded desktop configuration.
    pub fn from_config(config: &DesktopConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.server_url,
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// The server base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward a chat message to `POST /api/chat` and return the reply text.
    pub async fn send_message(&self, message: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/chat", self.base_url);
        let payload = ChatRequest {
            message: message.to_string(),
        };

        let resp = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::ConnectionFailed {
                endpoint: url.clone(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let mut body = resp.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            tracing::warn!(url = %url, status = status.as_u16(), "chat request rejected");
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = resp.json().await.map_err(|e| ApiError::InvalidResponse {
            reason: e.to_string(),
        })?;

        tracing::debug!(
            request_len = message.len(),
            response_len = chat.response.len(),
            "chat round-trip complete"
        );
        Ok(chat.response)
    }

    /// Probe `GET /api/health`. Returns `true` on any 2xx answer.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.http.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "health probe failed");
                false
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
