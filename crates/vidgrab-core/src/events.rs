//! Hand-off messages from background units to the coordinating unit.
//!
//! Background work never touches UI-visible state directly. Everything it
//! has to say is expressed as one of these events and delivered over a
//! channel; the coordinating unit applies them in arrival order.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag so they can be forwarded to a
//! non-Rust front-end unchanged:
//!
//! ```json
//! { "type": "status", "text": "Downloading yt-dlp.exe..." }
//! ```

use serde::{Deserialize, Serialize};

use crate::request::RunOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// Human-readable progress text for the status line.
    Status { text: String },

    /// Every manifest tool is present. Sent at most once per process.
    Ready,

    /// Provisioning stopped on an error and will not be retried.
    ProvisioningFailed { reason: String },

    /// A supervisor invocation returned.
    RunFinished { outcome: RunOutcome },
}

impl AppEvent {
    pub fn status(text: impl Into<String>) -> Self {
        Self::Status { text: text.into() }
    }

    pub fn provisioning_failed(reason: impl Into<String>) -> Self {
        Self::ProvisioningFailed {
            reason: reason.into(),
        }
    }

    pub const fn run_finished(outcome: RunOutcome) -> Self {
        Self::RunFinished { outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RunFailure;

    #[test]
    fn status_event_serialization() {
        let json = serde_json::to_string(&AppEvent::status("Ready.")).unwrap();
        assert_eq!(json, r#"{"type":"status","text":"Ready."}"#);
    }

    #[test]
    fn run_finished_carries_failure_detail() {
        let event = AppEvent::run_finished(RunOutcome::Failure(RunFailure::Exit { code: Some(1) }));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"run_finished\""));
        assert!(json.contains("\"outcome\":\"failure\""));
        assert!(json.contains("\"code\":1"));

        let back: AppEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
