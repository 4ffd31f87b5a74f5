//! `evilgenius status [VM]`: show machine lifecycle states.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::MachineInspector;

/// Arguments for the status command.
#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {
    /// Show only this machine; fails if vagrant does not list it
    pub vm: Option<String>,
}

/// Run `evilgenius status`.
///
/// # Errors
///
/// Returns an error if vagrant cannot be run, its output cannot be parsed,
/// or the requested machine is not listed.
pub async fn run(
    app: &AppContext,
    inspector: &impl MachineInspector,
    args: &StatusArgs,
) -> Result<()> {
    let renderer = app.renderer();
    match args.vm.as_deref() {
        Some(vm) => {
            let state = inspector.status_of(vm).await?;
            renderer.machine_state(vm, state)
        }
        None => {
            let statuses = inspector.status().await?;
            renderer.status(&statuses)
        }
    }
}
