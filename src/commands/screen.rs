//! Tauri IPC commands for the main screen.
//!
//! Every state change is also pushed as a `screen-updated` event so the
//! webview can re-render without polling.

use tauri::Emitter;

use crate::bridge::LocalBridge;
use crate::screen::{submit_form, FormKind, Screen, ScreenSnapshot};
use crate::TokioMutex;

/// Event carrying a [`ScreenSnapshot`].
pub const SCREEN_UPDATED_EVENT: &str = "screen-updated";

fn emit_snapshot(app_handle: &tauri::AppHandle, snapshot: &ScreenSnapshot) {
    if let Err(e) = app_handle.emit(SCREEN_UPDATED_EVENT, snapshot) {
        tracing::warn!(error = %e, "failed to emit screen update");
    }
}

/// Current render state.
#[tauri::command]
pub async fn get_screen(
    screen: tauri::State<'_, TokioMutex<Screen>>,
) -> Result<ScreenSnapshot, String> {
    Ok(screen.lock().await.snapshot())
}

/// Replace the text of a form field (called on every keystroke).
#[tauri::command]
pub async fn screen_set_input(
    form: FormKind,
    text: String,
    app_handle: tauri::AppHandle,
    screen: tauri::State<'_, TokioMutex<Screen>>,
) -> Result<ScreenSnapshot, String> {
    let snapshot = {
        let mut screen = screen.lock().await;
        screen.set_input(form, text);
        screen.snapshot()
    };
    emit_snapshot(&app_handle, &snapshot);
    Ok(snapshot)
}

/// Submit a form with the field's current `text` and resolve once its result
/// label has been updated.
///
/// Keystroke updates are separate IPC tasks, so the submitted text is passed
/// along here rather than read from the last stored input.
#[tauri::command]
pub async fn screen_submit(
    form: FormKind,
    text: String,
    app_handle: tauri::AppHandle,
    screen: tauri::State<'_, TokioMutex<Screen>>,
    bridge: tauri::State<'_, LocalBridge>,
) -> Result<ScreenSnapshot, String> {
    let snapshot = submit_form(screen.inner(), bridge.inner(), form, text, |snapshot| {
        emit_snapshot(&app_handle, snapshot)
    })
    .await;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::bridge::{BridgeError, CommandBridge, Payload};

    struct FailingBridge;

    impl CommandBridge for FailingBridge {
        async fn invoke(&self, _command: &str, _payload: Payload) -> Result<String, BridgeError> {
            Err(BridgeError::failed("timeout"))
        }
    }

    #[test]
    fn test_form_arg_names() {
        let form: FormKind = serde_json::from_str(r#""greet""#).unwrap();
        assert_eq!(form, FormKind::Greet);
        let form: FormKind = serde_json::from_str(r#""message""#).unwrap();
        assert_eq!(form, FormKind::Message);
        assert!(serde_json::from_str::<FormKind>(r#""send_message""#).is_err());
    }

    #[tokio::test]
    async fn test_submit_emits_pending_then_result_payloads() {
        let screen = TokioMutex::new(Screen::new());
        let emitted = Mutex::new(Vec::new());

        let snapshot = submit_form(&screen, &FailingBridge, FormKind::Message, "ping".into(), |s| {
            emitted.lock().unwrap().push(serde_json::to_value(s).unwrap())
        })
        .await;

        let emitted = emitted.into_inner().unwrap();
        assert_eq!(emitted.len(), 2);

        assert_eq!(emitted[0]["messageInput"], "ping");
        assert_eq!(emitted[0]["messagePending"], true);
        assert_eq!(emitted[0]["pythonResult"], "");

        assert_eq!(emitted[1]["messagePending"], false);
        assert_eq!(emitted[1]["pythonResult"], "Error: timeout");
        assert_eq!(emitted[1]["greetResult"], "");
        assert_eq!(snapshot.python_result, "Error: timeout");
    }
}
