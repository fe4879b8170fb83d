//! Run requests and their outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User input rejected before any background work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    #[error("URL cannot be empty")]
    EmptyUrl,
}

/// A single validated download request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    url: String,
}

impl RunRequest {
    /// Trim the raw input and reject it if nothing is left.
    ///
    /// The URL is otherwise passed through untouched; the primary tool
    /// decides what it accepts.
    pub fn parse(raw: &str) -> Result<Self, InputValidationError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(InputValidationError::EmptyUrl);
        }
        Ok(Self {
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Why an invocation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunFailure {
    /// The process ran and exited unsuccessfully. `code` is `None` when it
    /// was terminated by a signal.
    #[error("{}", exit_description(.code))]
    Exit { code: Option<i32> },

    /// The process could not be started at all.
    #[error("failed to start: {reason}")]
    Spawn { reason: String },
}

#[allow(clippy::ref_option)]
fn exit_description(code: &Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |c| format!("exited with code {c}"),
    )
}

/// Terminal result of one supervisor invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    Success,
    Failure(RunFailure),
}

impl RunOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let request = RunRequest::parse("  https://example.com/video \n").unwrap();
        assert_eq!(request.url(), "https://example.com/video");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(RunRequest::parse(""), Err(InputValidationError::EmptyUrl));
        assert_eq!(RunRequest::parse("   "), Err(InputValidationError::EmptyUrl));
        assert_eq!(RunRequest::parse("\t\n"), Err(InputValidationError::EmptyUrl));
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            RunFailure::Exit { code: Some(1) }.to_string(),
            "exited with code 1"
        );
        assert_eq!(
            RunFailure::Exit { code: None }.to_string(),
            "terminated by signal"
        );
        assert!(
            RunFailure::Spawn {
                reason: "No such file".into()
            }
            .to_string()
            .contains("No such file")
        );
    }
}
