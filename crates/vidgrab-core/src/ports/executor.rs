//! Process execution port used by the execution supervisor.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use thiserror::Error;

/// Flag names used when pointing the primary tool at its helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationProfile {
    /// Flag carrying the auxiliary tool's path.
    pub auxiliary_flag: String,
    /// Flag carrying the `<runtime-id>:<runtime-path>` value.
    pub runtime_flag: String,
    /// Identifier prefixed to the runtime path.
    pub runtime_id: String,
}

impl Default for InvocationProfile {
    fn default() -> Self {
        Self {
            auxiliary_flag: "--ffmpeg-location".to_string(),
            runtime_flag: "--js-runtimes".to_string(),
            runtime_id: "node".to_string(),
        }
    }
}

/// A fully built command line: program plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    /// Arguments as lossy UTF-8, for logging and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Render as a single shell-like line for log output.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// The process could not be run.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Runs one invocation to completion, blocking the calling thread.
pub trait ProcessExecutor: Send + Sync {
    fn execute(&self, invocation: &ToolInvocation) -> Result<ProcessExit, ExecutionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_zero_is_success() {
        assert!(ProcessExit::from_code(0).success());
        assert!(!ProcessExit::from_code(1).success());
        assert!(!ProcessExit { code: None }.success());
    }

    #[test]
    fn display_line_joins_program_and_args() {
        let invocation = ToolInvocation {
            program: PathBuf::from("bin/tool"),
            args: vec!["--flag".into(), "value".into()],
        };
        assert_eq!(invocation.display_line(), "bin/tool --flag value");
        assert_eq!(invocation.args_lossy(), ["--flag", "value"]);
    }
}
