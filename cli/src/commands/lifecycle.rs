//! `evilgenius init|up|destroy [VM]`: machine lifecycle commands.
//!
//! Each returns vagrant's exit code so the CLI can propagate it.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::MachineLifecycle;
use crate::application::services::machine;
use crate::commands::MachineArgs;

/// Run `evilgenius init [VM]`.
///
/// # Errors
///
/// Returns an error if vagrant cannot be run.
pub async fn init(
    app: &AppContext,
    lifecycle: &impl MachineLifecycle,
    args: &MachineArgs,
) -> Result<i32> {
    let invocation = machine::init(lifecycle, &app.reporter(), args.vm.as_deref()).await?;
    app.renderer().invocation(&invocation)?;
    Ok(invocation.exit_code)
}

/// Run `evilgenius up [VM]`.
///
/// # Errors
///
/// Returns an error if vagrant cannot be run.
pub async fn up(
    app: &AppContext,
    lifecycle: &impl MachineLifecycle,
    args: &MachineArgs,
) -> Result<i32> {
    let invocation = machine::up(lifecycle, &app.reporter(), args.vm.as_deref()).await?;
    app.renderer().invocation(&invocation)?;
    Ok(invocation.exit_code)
}

/// Run `evilgenius destroy [VM]`. Asks first unless `--yes` or non-interactive.
///
/// # Errors
///
/// Returns an error if the prompt fails or vagrant cannot be run.
pub async fn destroy(
    app: &AppContext,
    lifecycle: &impl MachineLifecycle,
    args: &MachineArgs,
) -> Result<i32> {
    let what = args.vm.as_deref().map_or_else(
        || "every machine in this environment".to_string(),
        |vm| format!("machine '{vm}'"),
    );
    if !app.non_interactive && !app.confirm(&format!("Destroy {what}?"), false)? {
        app.output.info("Cancelled.");
        return Ok(0);
    }
    let invocation = machine::destroy(lifecycle, &app.reporter(), args.vm.as_deref()).await?;
    app.renderer().invocation(&invocation)?;
    Ok(invocation.exit_code)
}
