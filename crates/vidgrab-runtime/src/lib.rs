//! Runtime for vidgrab: provisioning, process supervision, coordination.
//!
//! - [`provision`] makes every manifest tool present on disk, fetching only
//!   what is missing, then signals readiness once.
//! - [`supervisor`] turns a [`RunRequest`](vidgrab_core::RunRequest) into one
//!   blocking invocation of the primary tool and reports the outcome.
//! - [`coordinator`] is the single owner of UI-visible state. Background
//!   units talk to it only through a channel.

#![deny(unsafe_code)]

pub mod coordinator;
pub mod provision;
pub mod supervisor;

pub use coordinator::{ChannelSink, Coordinator, TriggerResponse, UiSurface};
pub use provision::{HttpFetcher, ProvisionReport, Provisioner, ProvisioningError};
pub use supervisor::{DownloadCommandBuilder, ExecutionSupervisor, SystemExecutor};
