//! Port definitions for external collaborators.
//!
//! Ports are the seams between the domain and infrastructure:
//! - `status` - where background units report progress and readiness
//! - `fetcher` - how a tool binary gets from its remote source onto disk
//! - `executor` - how a built command line is run as a child process
//!
//! Implementations live in `vidgrab-runtime` (and test fakes in test code).

mod executor;
mod fetcher;
mod status;

pub use executor::{ExecutionError, InvocationProfile, ProcessExecutor, ProcessExit, ToolInvocation};
pub use fetcher::{FetchError, ToolFetcher};
pub use status::{NoopStatusSink, ReadySink, StatusSink};
