//! In-process bridge onto the host command handlers.

use std::sync::Arc;

use super::{BridgeError, CommandBridge, Payload, CHECK_SERVER_STATUS, GREET, SEND_MESSAGE};
use crate::api_client::ApiClient;
use crate::commands::greet_text;

/// Dispatches bridge commands to the handlers behind the Tauri IPC commands.
///
/// Shares the managed [`ApiClient`] so screen submissions and direct
/// `invoke("send_message")` calls hit the server through one connection pool.
pub struct LocalBridge {
    api: Arc<ApiClient>,
}

impl LocalBridge {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

/// Look up a required payload key.
fn require<'a>(command: &str, payload: &'a Payload, key: &str) -> Result<&'a str, BridgeError> {
    payload.get(key).ok_or_else(|| BridgeError::MissingArgument {
        command: command.to_string(),
        key: key.to_string(),
    })
}

impl CommandBridge for LocalBridge {
    async fn invoke(&self, command: &str, payload: Payload) -> Result<String, BridgeError> {
        tracing::debug!(
            command,
            keys = ?payload.keys().collect::<Vec<_>>(),
            "bridge invoke"
        );

        match command {
            GREET => {
                let name = require(command, &payload, "name")?;
                Ok(greet_text(name))
            }
            SEND_MESSAGE => {
                let message = require(command, &payload, "message")?;
                let reply = self.api.send_message(message).await?;
                Ok(reply)
            }
            CHECK_SERVER_STATUS => {
                let online = self.api.check_health().await;
                Ok(if online { "online" } else { "offline" }.to_string())
            }
            other => {
                tracing::warn!(command = other, "bridge invoke for unregistered command");
                Err(BridgeError::UnknownCommand {
                    command: other.to_string(),
                })
            }
        }
    }
}
