//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the terminal front-end:
//! - Settings (environment, `.env`, command-line flags)
//! - Tool fetcher (HTTP via reqwest)
//! - Process executor (std::process)
//! - Provisioner and execution supervisor
//!
//! Handlers receive the composed [`CliContext`] and build a
//! [`Coordinator`] around their own [`UiSurface`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use vidgrab_core::{Settings, ToolManifest, resolve_bin_dir};
use vidgrab_runtime::{
    Coordinator, ExecutionSupervisor, HttpFetcher, Provisioner, SystemExecutor, UiSurface,
};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Environment settings overlaid with any flags given on the command line.
    ///
    /// Precedence per field: flag, then environment, then built-in default.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut settings = Settings::from_env()?;
        settings.merge(Self::flag_overrides(cli)?);
        Ok(Self { settings })
    }

    fn flag_overrides(cli: &Cli) -> Result<Settings, CliError> {
        let bin_dir = cli
            .bin_dir
            .as_deref()
            .map(|raw| resolve_bin_dir(Some(raw)))
            .transpose()?;

        Ok(Settings {
            bin_dir,
            manifest_path: cli.manifest.clone(),
            fetch_timeout_secs: cli.fetch_timeout,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub provisioner: Arc<Provisioner>,
    pub supervisor: Arc<ExecutionSupervisor>,
}

impl CliContext {
    pub fn bin_dir(&self) -> &Path {
        self.provisioner.bin_dir()
    }

    pub fn manifest(&self) -> &ToolManifest {
        self.provisioner.manifest()
    }

    /// A fresh coordinator driving `surface`.
    pub fn coordinator<U: UiSurface>(&self, surface: U) -> Coordinator<U> {
        Coordinator::new(
            surface,
            Arc::clone(&self.provisioner),
            Arc::clone(&self.supervisor),
        )
    }
}

/// Wire the concrete fetcher and executor into a [`CliContext`].
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let manifest = config.settings.load_manifest()?;
    let bin_dir: PathBuf = config.settings.effective_bin_dir();

    let fetcher = HttpFetcher::with_timeout(config.settings.fetch_timeout())
        .map_err(|e| CliError::Config(format!("HTTP client: {e}")))?;

    let tools = manifest.resolve(&bin_dir);
    debug!(
        bin_dir = %bin_dir.display(),
        tools = manifest.len(),
        timeout = ?config.settings.fetch_timeout(),
        "Bootstrapping CLI context"
    );

    let provisioner = Provisioner::new(manifest, bin_dir, Arc::new(fetcher));
    let supervisor = ExecutionSupervisor::new(tools, Arc::new(SystemExecutor));

    Ok(CliContext {
        provisioner: Arc::new(provisioner),
        supervisor: Arc::new(supervisor),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::parse_from([
            "vidgrab",
            "--bin-dir",
            "/srv/tools",
            "--fetch-timeout",
            "12",
            "paths",
        ]);
        let overrides = CliConfig::flag_overrides(&cli).unwrap();
        assert_eq!(overrides.bin_dir, Some(PathBuf::from("/srv/tools")));
        assert_eq!(overrides.fetch_timeout_secs, Some(12));
    }

    #[test]
    fn manifest_from_environment_survives_without_flag() {
        let cli = Cli::parse_from(["vidgrab", "paths"]);
        let mut settings = Settings {
            manifest_path: Some(PathBuf::from("/etc/vidgrab/tools.json")),
            ..Settings::default()
        };
        settings.merge(CliConfig::flag_overrides(&cli).unwrap());
        assert_eq!(
            settings.manifest_path,
            Some(PathBuf::from("/etc/vidgrab/tools.json"))
        );

        let cli = Cli::parse_from(["vidgrab", "--manifest", "local.json", "paths"]);
        settings.merge(CliConfig::flag_overrides(&cli).unwrap());
        assert_eq!(settings.manifest_path, Some(PathBuf::from("local.json")));
    }

    #[test]
    fn bootstrap_uses_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            settings: Settings {
                bin_dir: Some(dir.path().to_path_buf()),
                manifest_path: None,
                fetch_timeout_secs: Some(5),
            },
        };
        assert_eq!(config.settings.fetch_timeout(), Some(Duration::from_secs(5)));

        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.bin_dir(), dir.path());
        assert_eq!(ctx.manifest(), &ToolManifest::default_tools());
        assert_eq!(
            ctx.supervisor.tools().primary,
            dir.path().join("yt-dlp.exe")
        );
    }

    #[test]
    fn bootstrap_reports_bad_manifest_as_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("tools.json");
        std::fs::write(&manifest, "[]").unwrap();

        let config = CliConfig {
            settings: Settings {
                manifest_path: Some(manifest),
                ..Settings::default()
            },
        };
        let err = bootstrap(&config).err().unwrap();
        assert_eq!(err.exit_code(), 78);
    }
}
