//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Build a coordinator around a terminal surface
//!   2. Drive it until the command's goal is reached
//!   3. Map the final state to a `CliError`
//!
//! Handlers never touch the provisioner or supervisor directly; all state
//! changes go through the coordinator.

pub mod download;
pub mod interactive;
pub mod paths;
pub mod setup;

use vidgrab_core::ProvisioningState;
use vidgrab_runtime::{Coordinator, UiSurface};

use crate::error::CliError;

/// Start provisioning and wait for it to settle.
pub(crate) async fn provision<U: UiSurface>(
    coordinator: &mut Coordinator<U>,
) -> Result<(), CliError> {
    coordinator.start_provisioning();
    match coordinator.wait_for_provisioning().await {
        ProvisioningState::Ready => Ok(()),
        ProvisioningState::Failed(reason) => Err(CliError::Provisioning(reason.clone())),
        other => Err(CliError::Provisioning(format!(
            "provisioning stopped in state {other:?}"
        ))),
    }
}
