//! CLI-specific error types and exit codes.

use thiserror::Error;
use vidgrab_core::{PathError, SettingsError};

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin closed, terminal unavailable, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tools could not be provisioned.
    #[error("Setup failed: {0}")]
    Provisioning(String),

    /// The download tool ran and failed, or could not be started.
    #[error("Download failed: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Process(_) => 1,
            Self::Arguments(_) => 2,       // EX_USAGE
            Self::Provisioning(_) => 69,   // EX_UNAVAILABLE
            Self::Io(_) => 74,             // EX_IOERR
            Self::Config(_) => 78,         // EX_CONFIG
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
