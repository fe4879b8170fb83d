//! Path utilities for the tools directory.
//!
//! - Resolves where provisioned tools live (flag, environment, default)
//! - Creates and verifies that directory idempotently
//!
//! Returns `PathBuf` and `PathError`; no interactive I/O happens here.

mod ensure;
mod error;
mod resolve;

pub use ensure::{ensure_directory, verify_writable};
pub use error::PathError;
pub use resolve::{BIN_DIR_ENV, resolve_bin_dir};
