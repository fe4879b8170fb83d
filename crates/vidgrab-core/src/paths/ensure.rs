//! Directory creation and verification utilities.
//!
//! `ensure_directory` is safe to call repeatedly and on partially existing
//! trees: missing components are created, existing ones are left alone.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

/// Ensure `path` exists as a writable directory, creating it and any
/// missing parents.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        debug!(path = %path.display(), "Creating tools directory");
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    verify_writable(path)
}

/// Verify a directory is writable by attempting to create a test file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let test_file = path.join(".vidgrab_write_test");
    let not_writable = |err: std::io::Error| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&test_file)
        .map_err(not_writable)?;
    file.write_all(b"test").map_err(not_writable)?;
    drop(file);
    let _ = fs::remove_file(&test_file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_nested_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("bin");

        ensure_directory(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn is_idempotent_on_existing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("bin");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.exe"), b"x").unwrap();

        ensure_directory(&target).unwrap();
        ensure_directory(&target).unwrap();

        assert_eq!(fs::read(target.join("keep.exe")).unwrap(), b"x");
        assert!(!target.join(".vidgrab_write_test").exists());
    }

    #[test]
    fn rejects_file_in_place_of_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("bin");
        fs::write(&target, b"not a dir").unwrap();

        let err = ensure_directory(&target).unwrap_err();
        assert!(matches!(err, PathError::NotADirectory(_)));
    }

    #[test]
    fn rejects_empty_path() {
        let err = ensure_directory(Path::new("")).unwrap_err();
        assert!(matches!(err, PathError::EmptyPath));
    }
}
