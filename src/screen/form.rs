//! Form controller: one text field, one submit action, one result label.

use serde::{Deserialize, Serialize};

use crate::bridge::{BridgeError, CommandBridge, Payload, GREET, SEND_MESSAGE};

/// Which of the two forms on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Name field → `greet`.
    Greet,
    /// Message field → `send_message`.
    Message,
}

impl FormKind {
    pub fn command(self) -> &'static str {
        match self {
            FormKind::Greet => GREET,
            FormKind::Message => SEND_MESSAGE,
        }
    }

    pub fn payload_key(self) -> &'static str {
        match self {
            FormKind::Greet => "name",
            FormKind::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Idle,
    AwaitingResponse,
}

/// Render a failed call as display text.
pub fn format_error(err: &BridgeError) -> String {
    format!("Error: {err}")
}

/// A submitted request, detached from the form that issued it.
///
/// The payload is a copy of the input at submission time.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub form: FormKind,
    pub seq: u64,
    pub command: &'static str,
    pub payload: Payload,
}

impl PendingRequest {
    /// Run the bridge call. Always resolves; failures are carried in the result.
    pub async fn dispatch<B: CommandBridge>(self, bridge: &B) -> Completion {
        let result = bridge.invoke(self.command, self.payload).await;
        Completion {
            form: self.form,
            seq: self.seq,
            result,
        }
    }
}

/// Outcome of a [`PendingRequest`], ready to be applied to its form.
#[derive(Debug)]
pub struct Completion {
    pub form: FormKind,
    pub seq: u64,
    pub result: Result<String, BridgeError>,
}

/// State of a single form.
///
/// `issued_seq` numbers submissions. A completion older than the newest one
/// already applied is dropped, so the label never regresses to a stale reply.
/// The form is awaiting exactly while the latest submission is unresolved.
#[derive(Debug, Clone)]
pub struct FormController {
    kind: FormKind,
    input: String,
    display: String,
    issued_seq: u64,
    applied_seq: u64,
}

impl FormController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            input: String::new(),
            display: String::new(),
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Replace the field contents. No validation.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> FormState {
        if self.applied_seq < self.issued_seq {
            FormState::AwaitingResponse
        } else {
            FormState::Idle
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state() == FormState::AwaitingResponse
    }

    /// Issue a request for the current input.
    pub fn begin_submit(&mut self) -> PendingRequest {
        self.issued_seq += 1;
        PendingRequest {
            form: self.kind,
            seq: self.issued_seq,
            command: self.kind.command(),
            payload: Payload::single(self.kind.payload_key(), self.input.clone()),
        }
    }

    /// Apply the result of request `seq`. Returns `false` if it was discarded.
    pub fn apply(&mut self, seq: u64, result: Result<String, BridgeError>) -> bool {
        if seq == 0 || seq > self.issued_seq {
            tracing::warn!(form = ?self.kind, seq, issued = self.issued_seq, "completion for unknown request");
            return false;
        }
        if seq <= self.applied_seq {
            tracing::debug!(form = ?self.kind, seq, applied = self.applied_seq, "stale completion dropped");
            return false;
        }
        self.applied_seq = seq;

        self.display = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::info!(form = ?self.kind, seq, error = %e, "bridge call failed");
                format_error(&e)
            }
        };
        true
    }

    /// Submit, await the bridge, and apply the outcome.
    pub async fn submit<B: CommandBridge>(&mut self, bridge: &B) -> bool {
        let completion = self.begin_submit().dispatch(bridge).await;
        self.apply(completion.seq, completion.result)
    }
}
