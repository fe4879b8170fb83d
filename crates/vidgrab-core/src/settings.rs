//! Settings domain types, defaults and the user-facing status strings.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::manifest::{ManifestError, ToolManifest};
use crate::paths::{PathError, resolve_bin_dir};

/// Tools directory used when nothing else is configured.
pub const DEFAULT_BIN_DIR: &str = "bin";

/// Environment variable holding an optional per-fetch timeout in seconds.
pub const FETCH_TIMEOUT_ENV: &str = "VIDGRAB_FETCH_TIMEOUT_SECS";

/// Environment variable pointing at a JSON manifest file.
pub const MANIFEST_ENV: &str = "VIDGRAB_MANIFEST";

/// Status lines shown to the user. Kept together so every front-end
/// reports the same text.
pub mod status {
    pub const INITIALIZING: &str = "Initializing...";
    pub const READY: &str = "Ready.";
    pub const EMPTY_URL: &str = "Please enter a URL.";
    pub const RUN_STARTED: &str = "Downloading...";
    pub const RUN_FINISHED: &str = "Download finished.";
    pub const RUN_FAILED: &str = "Error during download.";

    /// Shown before a missing tool is fetched.
    pub fn fetching(tool: &str) -> String {
        format!("Downloading {tool}...")
    }

    /// Shown when provisioning gives up.
    pub fn setup_failed(reason: &str) -> String {
        format!("Setup failed: {reason}")
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application settings.
///
/// All fields are optional; the `effective_*` accessors apply defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory the tools are provisioned into.
    pub bin_dir: Option<PathBuf>,

    /// JSON manifest replacing the built-in tool list.
    pub manifest_path: Option<PathBuf>,

    /// Upper bound for each individual fetch. `None` means no deadline.
    pub fetch_timeout_secs: Option<u64>,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// Unset variables stay `None`; malformed values are errors.
    pub fn from_env() -> Result<Self, SettingsError> {
        let bin_dir = Some(resolve_bin_dir(None)?);

        let manifest_path = env::var(MANIFEST_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(v.trim()));

        let fetch_timeout_secs = match env::var(FETCH_TIMEOUT_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_timeout(&raw)?),
            _ => None,
        };

        Ok(Self {
            bin_dir,
            manifest_path,
            fetch_timeout_secs,
        })
    }

    /// Overlay values from `other` that are set.
    pub fn merge(&mut self, other: Self) {
        if other.bin_dir.is_some() {
            self.bin_dir = other.bin_dir;
        }
        if other.manifest_path.is_some() {
            self.manifest_path = other.manifest_path;
        }
        if other.fetch_timeout_secs.is_some() {
            self.fetch_timeout_secs = other.fetch_timeout_secs;
        }
    }

    pub fn effective_bin_dir(&self) -> PathBuf {
        self.bin_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BIN_DIR))
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }

    /// The manifest to provision: the configured file, or the built-in list.
    pub fn load_manifest(&self) -> Result<ToolManifest, SettingsError> {
        match &self.manifest_path {
            Some(path) => Ok(ToolManifest::load(path)?),
            None => Ok(ToolManifest::default_tools()),
        }
    }
}

/// Parse a timeout in whole seconds. Zero is rejected; leave it unset instead.
pub fn parse_timeout(raw: &str) -> Result<u64, SettingsError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(SettingsError::InvalidValue {
            key: FETCH_TIMEOUT_ENV,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::default();
        assert_eq!(settings.effective_bin_dir(), PathBuf::from("bin"));
        assert_eq!(settings.fetch_timeout(), None);
        assert_eq!(
            settings.load_manifest().unwrap(),
            ToolManifest::default_tools()
        );
    }

    #[test]
    fn merge_only_overrides_set_fields() {
        let mut base = Settings {
            bin_dir: Some(PathBuf::from("/a")),
            manifest_path: None,
            fetch_timeout_secs: Some(30),
        };
        base.merge(Settings {
            bin_dir: Some(PathBuf::from("/b")),
            ..Settings::default()
        });

        assert_eq!(base.bin_dir, Some(PathBuf::from("/b")));
        assert_eq!(base.fetch_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn timeout_must_be_positive_integer() {
        assert_eq!(parse_timeout(" 15 ").unwrap(), 15);
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn status_text_matches_front_end_copy() {
        assert_eq!(status::fetching("yt-dlp.exe"), "Downloading yt-dlp.exe...");
        assert_eq!(status::setup_failed("boom"), "Setup failed: boom");
    }
}
