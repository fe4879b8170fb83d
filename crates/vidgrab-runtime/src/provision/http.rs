//! HTTP(S) fetcher backed by `reqwest`.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use vidgrab_core::{FetchError, ToolFetcher};

const CLIENT_USER_AGENT: &str = concat!("vidgrab/", env!("CARGO_PKG_VERSION"));

/// Streams a remote file verbatim to disk.
///
/// Redirects are followed (the default mirror answers with one). There is
/// no retry, resume or checksum.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Fetcher with no deadline on individual downloads.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetcher whose requests fail once `timeout` elapses.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolFetcher for HttpFetcher {
    async fn fetch(&self, source_url: &str, dest: &Path) -> Result<u64, FetchError> {
        let network = |err: reqwest::Error| FetchError::Network {
            url: source_url.to_string(),
            reason: err.to_string(),
        };

        let response = self
            .client
            .get(source_url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: source_url.to_string(),
                status: response.status().as_u16(),
            });
        }

        debug!(url = %source_url, total = ?response.content_length(), "Download started");

        let file = File::create(dest).await.map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })?;

        // Once the file exists, any failure must not leave it at the target:
        // a later run would treat it as present and never repair it.
        match write_body(response, file, source_url, dest).await {
            Ok(written) => Ok(written),
            Err(err) => {
                discard_partial(dest).await;
                Err(err)
            }
        }
    }
}

/// Stream the body into `file`, flush it and mark it executable.
async fn write_body(
    response: reqwest::Response,
    mut file: File,
    source_url: &str,
    dest: &Path,
) -> Result<u64, FetchError> {
    let write_error = |source| FetchError::Write {
        path: dest.to_path_buf(),
        source,
    };

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| FetchError::Network {
            url: source_url.to_string(),
            reason: err.to_string(),
        })?;
        file.write_all(&chunk).await.map_err(write_error)?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(write_error)?;
    drop(file);

    mark_executable(dest).await?;
    Ok(written)
}

/// Remove a file this fetch started but could not finish.
async fn discard_partial(dest: &Path) {
    if let Err(err) = fs::remove_file(dest).await {
        warn!(path = %dest.display(), error = %err, "Failed to remove partial download");
    }
}

#[cfg(unix)]
async fn mark_executable(dest: &Path) -> Result<(), FetchError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dest, std::fs::Permissions::from_mode(0o755))
        .await
        .map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })
}

#[cfg(not(unix))]
#[allow(clippy::unused_async)]
async fn mark_executable(_dest: &Path) -> Result<(), FetchError> {
    Ok(())
}
