//! Execution supervisor: one blocking invocation of the primary tool.
//!
//! The supervisor is stateless. It performs no readiness check of its own;
//! the coordinator only hands it work once provisioning is `Ready`.

mod executor;
mod invocation;

pub use executor::SystemExecutor;
pub use invocation::{DownloadCommandBuilder, runtime_arg};

use std::sync::Arc;

use tracing::{info, warn};
use vidgrab_core::{
    InvocationProfile, ProcessExecutor, ResolvedTools, RunFailure, RunOutcome, RunRequest,
    StatusSink, ToolInvocation, status,
};

pub struct ExecutionSupervisor {
    tools: ResolvedTools,
    profile: InvocationProfile,
    executor: Arc<dyn ProcessExecutor>,
}

impl ExecutionSupervisor {
    pub fn new(tools: ResolvedTools, executor: Arc<dyn ProcessExecutor>) -> Self {
        Self {
            tools,
            profile: InvocationProfile::default(),
            executor,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: InvocationProfile) -> Self {
        self.profile = profile;
        self
    }

    pub const fn tools(&self) -> &ResolvedTools {
        &self.tools
    }

    /// `<primary> <aux-flag> <aux-path> <runtime-flag> <id>:<runtime-path> <url>`
    pub fn build_invocation(&self, request: &RunRequest) -> ToolInvocation {
        DownloadCommandBuilder::new(&self.tools.primary)
            .arg_with_value(&self.profile.auxiliary_flag, &self.tools.auxiliary)
            .arg_with_value(
                &self.profile.runtime_flag,
                runtime_arg(&self.profile.runtime_id, &self.tools.runtime),
            )
            .url(request.url())
            .build()
    }

    /// Run the primary tool for `request`, blocking until it exits.
    ///
    /// Every failure, including a process that cannot be spawned, becomes
    /// `RunOutcome::Failure`; nothing is propagated to the caller.
    pub fn run(&self, request: &RunRequest, sink: &dyn StatusSink) -> RunOutcome {
        let invocation = self.build_invocation(request);
        info!(command = %invocation.display_line(), "Starting download");
        sink.report_status(status::RUN_STARTED);

        let outcome = match self.executor.execute(&invocation) {
            Ok(exit) if exit.success() => RunOutcome::Success,
            Ok(exit) => RunOutcome::Failure(RunFailure::Exit { code: exit.code }),
            Err(err) => RunOutcome::Failure(RunFailure::Spawn {
                reason: err.to_string(),
            }),
        };

        match &outcome {
            RunOutcome::Success => {
                info!(url = %request.url(), "Download finished");
                sink.report_status(status::RUN_FINISHED);
            }
            RunOutcome::Failure(failure) => {
                warn!(url = %request.url(), %failure, "Download failed");
                sink.report_status(status::RUN_FAILED);
            }
        }

        outcome
    }
}
