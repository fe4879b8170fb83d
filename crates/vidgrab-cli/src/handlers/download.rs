//! Download command handler.

use tracing::warn;
use vidgrab_core::{RunOutcome, status};
use vidgrab_runtime::TriggerResponse;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::TerminalSurface;

use super::provision;

/// Provision if needed, then run the downloader once for `url`.
pub async fn execute(ctx: &CliContext, url: &str) -> Result<(), CliError> {
    let mut coordinator = ctx.coordinator(TerminalSurface::new());
    let result = async {
        provision(&mut coordinator).await?;

        match coordinator.trigger(url) {
            TriggerResponse::Started => {}
            TriggerResponse::Invalid => return Err(CliError::Arguments(status::EMPTY_URL.into())),
            TriggerResponse::Ignored => {
                warn!("Trigger refused right after provisioning");
                return Err(CliError::Provisioning("tools are not ready".into()));
            }
        }

        match coordinator.wait_for_run().await {
            Some(RunOutcome::Success) => Ok(()),
            Some(RunOutcome::Failure(failure)) => Err(CliError::Process(failure.to_string())),
            None => Err(CliError::Process("no outcome was reported".into())),
        }
    }
    .await;

    coordinator.surface().finish();
    result
}
