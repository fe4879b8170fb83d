//! Idempotent provisioning of the manifest's tools.
//!
//! The provisioner walks the manifest in order, one tool at a time. A tool
//! whose target file already exists is skipped without looking at its
//! contents; a previously truncated download is therefore never repaired.

mod error;
mod http;

pub use error::ProvisioningError;
pub use http::HttpFetcher;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info};
use vidgrab_core::{
    ReadySink, StatusSink, ToolEntry, ToolFetcher, ToolManifest,
    ensure_directory, status,
};

/// What a successful provisioning pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Tools fetched in this pass, in fetch order.
    pub fetched: Vec<String>,
    /// Tools that were already present and skipped.
    pub present: Vec<String>,
    /// Total bytes written.
    pub bytes: u64,
}

/// Ensures every tool in a manifest exists under one directory.
pub struct Provisioner {
    manifest: ToolManifest,
    bin_dir: PathBuf,
    fetcher: Arc<dyn ToolFetcher>,
}

impl Provisioner {
    pub fn new(
        manifest: ToolManifest,
        bin_dir: impl Into<PathBuf>,
        fetcher: Arc<dyn ToolFetcher>,
    ) -> Self {
        Self {
            manifest,
            bin_dir: bin_dir.into(),
            fetcher,
        }
    }

    pub const fn manifest(&self) -> &ToolManifest {
        &self.manifest
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Tools whose target file does not exist yet, in manifest order.
    pub fn missing_tools(&self) -> Vec<&ToolEntry> {
        self.manifest
            .iter()
            .filter(|tool| !tool.target_path(&self.bin_dir).exists())
            .collect()
    }

    /// Provision every tool, then report "ready" and fire `ready` once.
    ///
    /// On failure the error is reported to `sink` before it is returned and
    /// `ready` is never called.
    pub async fn run(
        &self,
        sink: &dyn StatusSink,
        ready: &dyn ReadySink,
    ) -> Result<ProvisionReport, ProvisioningError> {
        match self.provision(sink).await {
            Ok(report) => {
                info!(
                    fetched = report.fetched.len(),
                    present = report.present.len(),
                    bytes = report.bytes,
                    "Provisioning complete"
                );
                sink.report_status(status::READY);
                ready.on_ready();
                Ok(report)
            }
            Err(err) => {
                error!(error = %err, "Provisioning failed");
                sink.report_status(&status::setup_failed(&err.to_string()));
                Err(err)
            }
        }
    }

    async fn provision(&self, sink: &dyn StatusSink) -> Result<ProvisionReport, ProvisioningError> {
        ensure_directory(&self.bin_dir)?;

        let mut report = ProvisionReport::default();
        for tool in &self.manifest {
            let target = tool.target_path(&self.bin_dir);
            if target.exists() {
                debug!(tool = %tool.name, path = %target.display(), "Tool already present");
                report.present.push(tool.name.clone());
                continue;
            }

            info!(tool = %tool.name, url = %tool.source_url, "Fetching missing tool");
            sink.report_status(&status::fetching(&tool.name));

            let bytes = self
                .fetcher
                .fetch(&tool.source_url, &target)
                .await
                .map_err(|source| ProvisioningError::Fetch {
                    tool: tool.name.clone(),
                    source,
                })?;

            debug!(tool = %tool.name, bytes, "Tool downloaded");
            report.fetched.push(tool.name.clone());
            report.bytes += bytes;
        }

        Ok(report)
    }
}
