//! The main screen: a greet form and a message form.
//!
//! The webview only renders [`ScreenSnapshot`]s; input, submission and
//! result text are owned here and driven through the `screen_*` IPC commands.

pub mod form;

use serde::Serialize;

use crate::bridge::CommandBridge;
use crate::TokioMutex;

pub use form::{format_error, Completion, FormController, FormKind, FormState, PendingRequest};

/// Both forms of the screen.
#[derive(Debug, Clone)]
pub struct Screen {
    greet: FormController,
    message: FormController,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            greet: FormController::new(FormKind::Greet),
            message: FormController::new(FormKind::Message),
        }
    }

    pub fn form(&self, kind: FormKind) -> &FormController {
        match kind {
            FormKind::Greet => &self.greet,
            FormKind::Message => &self.message,
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> &mut FormController {
        match kind {
            FormKind::Greet => &mut self.greet,
            FormKind::Message => &mut self.message,
        }
    }

    pub fn set_input(&mut self, kind: FormKind, text: impl Into<String>) {
        self.form_mut(kind).set_input(text);
    }

    pub fn begin_submit(&mut self, kind: FormKind) -> PendingRequest {
        self.form_mut(kind).begin_submit()
    }

    /// Store `text` as the field contents and issue a request for it.
    pub fn submit_input(&mut self, kind: FormKind, text: impl Into<String>) -> PendingRequest {
        let form = self.form_mut(kind);
        form.set_input(text);
        form.begin_submit()
    }

    /// Route a completion back to the form that issued it.
    pub fn apply(&mut self, completion: Completion) -> bool {
        self.form_mut(completion.form)
            .apply(completion.seq, completion.result)
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            name_input: self.greet.input().to_string(),
            greet_result: self.greet.display().to_string(),
            greet_pending: self.greet.is_pending(),
            message_input: self.message.input().to_string(),
            python_result: self.message.display().to_string(),
            message_pending: self.message.is_pending(),
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Render state pushed to the webview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSnapshot {
    pub name_input: String,
    pub greet_result: String,
    pub greet_pending: bool,
    pub message_input: String,
    pub python_result: String,
    pub message_pending: bool,
    pub updated_at: String,
}

/// Submit `text` as the contents of form `kind` on a shared screen.
///
/// The text is stored and the request issued under one lock, so the payload
/// is exactly what the field held at submission even if earlier
/// `set_input` calls are still queued. The lock is held only to issue the
/// request and to apply its outcome, so input edits and other submissions
/// proceed while the bridge call is out. `on_update` sees the snapshot after
/// each of those two steps.
pub async fn submit_form<B, F>(
    screen: &TokioMutex<Screen>,
    bridge: &B,
    kind: FormKind,
    text: String,
    on_update: F,
) -> ScreenSnapshot
where
    B: CommandBridge,
    F: Fn(&ScreenSnapshot) + Send,
{
    let pending = {
        let mut screen = screen.lock().await;
        let pending = screen.submit_input(kind, text);
        on_update(&screen.snapshot());
        pending
    };

    tracing::info!(
        form = ?kind,
        seq = pending.seq,
        command = pending.command,
        "form submitted"
    );

    let completion = pending.dispatch(bridge).await;

    let mut screen = screen.lock().await;
    let seq = completion.seq;
    let applied = screen.apply(completion);
    let snapshot = screen.snapshot();
    on_update(&snapshot);

    tracing::info!(form = ?kind, seq, applied, "form completed");
    snapshot
}
