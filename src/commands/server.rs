//! Tauri IPC commands backed by the KogniTerm server.

use std::sync::Arc;

use crate::api_client::ApiClient;

/// Send `message` and map a failure to the text the webview displays.
async fn forward_message(api: &ApiClient, message: &str) -> Result<String, String> {
    api.send_message(message).await.map_err(|e| {
        tracing::warn!(error = %e, "send_message failed");
        e.to_string()
    })
}

/// Forward a chat message to the KogniTerm server and return its reply.
///
/// Errors come back as their display text, e.g.
/// `"connection failed to http://localhost:8000/api/chat: ..."`.
#[tauri::command]
pub async fn send_message(
    message: String,
    api: tauri::State<'_, Arc<ApiClient>>,
) -> Result<String, String> {
    forward_message(&api, &message).await
}

/// Whether the KogniTerm server answers its health probe.
#[tauri::command]
pub async fn check_server_status(api: tauri::State<'_, Arc<ApiClient>>) -> Result<bool, String> {
    let online = api.check_health().await;
    tracing::debug!(online, server = %api.base_url(), "check_server_status");
    Ok(online)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::api_client::test_server::{serve_once, unused_local_url};

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, Duration::from_secs(2), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_forward_message_reply() {
        let (url, _server) = serve_once(200, r#"{"response":"pong"}"#).await;
        assert_eq!(forward_message(&client(&url), "ping").await, Ok("pong".to_string()));
    }

    #[tokio::test]
    async fn test_forward_message_error_is_display_text() {
        let (url, _server) = serve_once(502, "bad gateway").await;
        let err = forward_message(&client(&url), "ping").await.unwrap_err();
        assert_eq!(err, "HTTP 502: bad gateway");

        let url = unused_local_url().await;
        let err = forward_message(&client(&url), "ping").await.unwrap_err();
        assert!(err.starts_with(&format!("connection failed to {url}/api/chat: ")));
    }
}
