//! Command bridge: the boundary between the screen and the host commands.
//!
//! A form submission turns into one `invoke(command, payload)` call that
//! resolves to the command's text or a [`BridgeError`]. The screen only
//! depends on the [`CommandBridge`] trait; [`LocalBridge`] dispatches onto
//! the same handlers the Tauri IPC commands use.

pub mod errors;
pub mod local;
pub mod payload;

use std::future::Future;

pub use errors::BridgeError;
pub use local::LocalBridge;
pub use payload::Payload;

/// Command names registered with the host.
pub const GREET: &str = "greet";
pub const SEND_MESSAGE: &str = "send_message";
pub const CHECK_SERVER_STATUS: &str = "check_server_status";

/// Asynchronous request/response call into the host.
///
/// No timeout, retry or cancellation is applied at this layer. A call that
/// never resolves leaves its form awaiting.
pub trait CommandBridge: Send + Sync {
    fn invoke(
        &self,
        command: &str,
        payload: Payload,
    ) -> impl Future<Output = Result<String, BridgeError>> + Send;
}
