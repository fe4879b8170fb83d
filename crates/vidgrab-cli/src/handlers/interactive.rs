//! Interactive command handler.
//!
//! Reads one URL per line from stdin. A line is only read while the
//! trigger is enabled, so input typed during provisioning or a running
//! download waits in the terminal buffer instead of being dropped.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;
use vidgrab_core::{AppEvent, ProvisioningState, RunOutcome};
use vidgrab_runtime::TriggerResponse;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::TerminalSurface;

pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let surface = TerminalSurface::new().prompting();
    run(ctx, surface, BufReader::new(tokio::io::stdin())).await
}

/// Drive a coordinator from `input` until it reaches end of file.
///
/// Fails with `Provisioning` if setup fails, or with `Process` if any
/// started download did not succeed.
pub async fn run<R>(ctx: &CliContext, surface: TerminalSurface, input: R) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
{
    let mut coordinator = ctx.coordinator(surface);
    let mut lines = input.lines();
    let mut failed = 0usize;
    let mut started = 0usize;

    coordinator.start_provisioning();

    loop {
        let accepting = coordinator.trigger_enabled();
        tokio::select! {
            event = coordinator.next_event() => {
                let Some(event) = event else { break };
                if matches!(event, AppEvent::RunFinished { .. }) {
                    if let Some(RunOutcome::Failure(failure)) = coordinator.last_outcome() {
                        failed += 1;
                        coordinator.surface().println(&format!("  {failure}"));
                    }
                }
                if let ProvisioningState::Failed(reason) = coordinator.provisioning() {
                    let reason = reason.clone();
                    coordinator.surface().finish();
                    return Err(CliError::Provisioning(reason));
                }
            }
            line = lines.next_line(), if accepting => {
                let Some(line) = line? else { break };
                match coordinator.trigger(&line) {
                    TriggerResponse::Started => started += 1,
                    TriggerResponse::Invalid => {}
                    TriggerResponse::Ignored => debug!("Line arrived while trigger disabled"),
                }
            }
        }
    }

    coordinator.surface().finish();
    if failed > 0 {
        return Err(CliError::Process(format!(
            "{failed} of {started} downloads failed"
        )));
    }
    Ok(())
}
