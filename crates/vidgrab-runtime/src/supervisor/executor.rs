//! Process executor backed by `std::process`.

use std::process::Command;

use tracing::debug;
use vidgrab_core::{ExecutionError, ProcessExecutor, ProcessExit, ToolInvocation};

/// Runs the invocation as a child process and waits for it to exit.
///
/// Stdio is inherited, so the tool's own output reaches the terminal the
/// front-end was started from. Nothing is parsed from it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn execute(&self, invocation: &ToolInvocation) -> Result<ProcessExit, ExecutionError> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|source| ExecutionError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        debug!(program = %invocation.program.display(), code = ?status.code(), "Process exited");
        Ok(ProcessExit {
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shell(script: &str) -> ToolInvocation {
        ToolInvocation {
            program: PathBuf::from("/bin/sh"),
            args: vec!["-c".into(), script.into()],
        }
    }

    #[test]
    fn reports_exit_codes() {
        let exit = SystemExecutor.execute(&shell("exit 0")).unwrap();
        assert!(exit.success());

        let exit = SystemExecutor.execute(&shell("exit 3")).unwrap();
        assert_eq!(exit.code, Some(3));
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let invocation = ToolInvocation {
            program: PathBuf::from("/nonexistent/vidgrab/tool"),
            args: vec![],
        };
        let err = SystemExecutor.execute(&invocation).unwrap_err();
        assert!(matches!(err, ExecutionError::Spawn { .. }));
    }
}
