//! Bridge error types.
//!
//! Callers do not branch on the variant: every failure is shown to the user
//! as `"Error: "` followed by its `Display` text.

use thiserror::Error;

use crate::api_client::ApiError;

/// A failed bridge call.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// No handler is registered under this command name.
    #[error("command {command} not found")]
    UnknownCommand { command: String },

    /// The payload lacks a key the command requires.
    #[error("invalid args `{key}` for command `{command}`: missing required key {key}")]
    MissingArgument { command: String, key: String },

    /// The handler ran and reported a failure.
    #[error("{reason}")]
    CommandFailed { reason: String },
}

impl BridgeError {
    pub fn failed(reason: impl Into<String>) -> Self {
        BridgeError::CommandFailed {
            reason: reason.into(),
        }
    }
}

impl From<ApiError> for BridgeError {
    fn from(e: ApiError) -> Self {
        BridgeError::CommandFailed {
            reason: e.to_string(),
        }
    }
}
