//! Lifecycle states owned by the coordinating unit.
//!
//! Both state machines only move forward. Transition methods return `true`
//! when the transition was applied and `false` when it was refused, leaving
//! the state untouched.

use serde::{Deserialize, Serialize};

/// Process-wide provisioning lifecycle.
///
/// `Uninitialized -> InProgress -> Ready`, or `InProgress -> Failed` when a
/// fetch or directory operation fails. `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum ProvisioningState {
    #[default]
    Uninitialized,
    InProgress,
    Ready,
    Failed(String),
}

impl ProvisioningState {
    pub fn begin(&mut self) -> bool {
        if *self == Self::Uninitialized {
            *self = Self::InProgress;
            true
        } else {
            false
        }
    }

    pub fn mark_ready(&mut self) -> bool {
        if *self == Self::InProgress {
            *self = Self::Ready;
            true
        } else {
            false
        }
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) -> bool {
        if *self == Self::InProgress {
            *self = Self::Failed(reason.into());
            true
        } else {
            false
        }
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready | Self::Failed(_))
    }
}

/// Per-trigger state: at most one supervisor invocation in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerState {
    #[default]
    Idle,
    Running,
}

impl TriggerState {
    pub fn start(&mut self) -> bool {
        if *self == Self::Idle {
            *self = Self::Running;
            true
        } else {
            false
        }
    }

    /// Return to idle. Always succeeds; finishing an idle trigger is a no-op.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}
