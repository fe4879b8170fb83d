//! Setup command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::TerminalSurface;

use super::provision;

/// Download any missing tools, then exit.
///
/// Running it again once everything is present performs no network access.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let mut coordinator = ctx.coordinator(TerminalSurface::new());
    let result = provision(&mut coordinator).await;
    coordinator.surface().finish();
    result?;

    println!("Tools ready in {}", ctx.bin_dir().display());
    Ok(())
}
