//! Resolution of the tools directory.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use crate::settings::DEFAULT_BIN_DIR;

/// Environment variable overriding the tools directory.
pub const BIN_DIR_ENV: &str = "VIDGRAB_BIN_DIR";

/// Resolve the directory provisioned tools live in.
///
/// Resolution order:
/// 1. Explicit value (e.g. a `--bin-dir` flag)
/// 2. `VIDGRAB_BIN_DIR` environment variable
/// 3. `bin` relative to the current directory
///
/// A leading `~` is expanded. Relative paths are kept relative so the
/// command line passed to the tools matches what the user configured.
pub fn resolve_bin_dir(explicit: Option<&str>) -> Result<PathBuf, PathError> {
    if let Some(raw) = explicit {
        return normalize_user_path(raw);
    }

    if let Ok(raw) = env::var(BIN_DIR_ENV) {
        if !raw.trim().is_empty() {
            return normalize_user_path(&raw);
        }
    }

    Ok(PathBuf::from(DEFAULT_BIN_DIR))
}

/// Trim and expand `~` in a user-provided path.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if trimmed == "~" {
        return dirs::home_dir().ok_or(PathError::NoHomeDir);
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_wins() {
        let path = resolve_bin_dir(Some("  /opt/tools  ")).unwrap();
        assert_eq!(path, PathBuf::from("/opt/tools"));
    }

    #[test]
    fn explicit_empty_value_is_rejected() {
        assert!(matches!(
            resolve_bin_dir(Some("   ")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_user_path("~/tools").unwrap(), home.join("tools"));
            assert_eq!(normalize_user_path("~").unwrap(), home);
        }
    }

    #[test]
    fn relative_paths_stay_relative() {
        assert_eq!(normalize_user_path("bin").unwrap(), PathBuf::from("bin"));
    }
}
