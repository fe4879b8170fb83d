//! Remote fetch port used by the provisioner.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a single tool.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("Download of {url} failed: HTTP {status}")]
    Status { url: String, status: u16 },

    /// Writing the payload to its target path failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copies one remote resource verbatim to a local path.
///
/// Implementations do no retrying and no integrity checking. On success
/// they return the number of bytes written.
#[async_trait]
pub trait ToolFetcher: Send + Sync {
    async fn fetch(&self, source_url: &str, dest: &Path) -> Result<u64, FetchError>;
}
