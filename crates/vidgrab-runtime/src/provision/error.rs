//! Error types for provisioning.

use thiserror::Error;
use vidgrab_core::{FetchError, PathError};

/// Errors that stop provisioning. None of them are retried.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// The tools directory could not be created or written.
    #[error("Tools directory unavailable: {0}")]
    Directory(#[from] PathError),

    /// A single tool could not be fetched.
    #[error("Failed to download {tool}: {source}")]
    Fetch {
        tool: String,
        #[source]
        source: FetchError,
    },
}
