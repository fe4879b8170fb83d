//! Core domain types and ports for vidgrab.
//!
//! This crate has no network or process code. It defines what the
//! provisioner and execution supervisor operate on (tool manifests,
//! lifecycle states, run requests and outcomes) and the ports through
//! which background work reports back to the coordinating unit.

#![deny(unused_crate_dependencies)]

pub mod events;
pub mod manifest;
pub mod paths;
pub mod ports;
pub mod request;
pub mod settings;
pub mod state;

// Re-export commonly used types for convenience
pub use events::AppEvent;
pub use manifest::{
    DEFAULT_MIRROR_BASE, ManifestError, ResolvedTools, ToolEntry, ToolManifest, ToolRole,
};
pub use ports::{
    ExecutionError, FetchError, InvocationProfile, NoopStatusSink, ProcessExecutor, ProcessExit,
    ReadySink, StatusSink, ToolFetcher, ToolInvocation,
};
pub use request::{InputValidationError, RunFailure, RunOutcome, RunRequest};
pub use settings::{
    DEFAULT_BIN_DIR, FETCH_TIMEOUT_ENV, MANIFEST_ENV, Settings, SettingsError, parse_timeout,
    status,
};
pub use state::{ProvisioningState, TriggerState};

// Re-export path utilities
pub use paths::{
    BIN_DIR_ENV, PathError, ensure_directory, resolve_bin_dir, verify_writable,
};
