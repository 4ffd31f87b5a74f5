//! `evilgenius ssh [--vm VM] <COMMAND>...`: run a command inside a machine.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RemoteShell;
use crate::application::services::machine;

/// Arguments for the ssh command.
#[derive(Args, Debug, Clone)]
pub struct SshArgs {
    /// Machine to run the command on (required in multi-machine environments)
    #[arg(long)]
    pub vm: Option<String>,

    /// Command to run; remaining arguments are joined with spaces
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Run `evilgenius ssh`.
///
/// # Errors
///
/// Returns an error if vagrant cannot be run.
pub async fn run(app: &AppContext, shell: &impl RemoteShell, args: &SshArgs) -> Result<i32> {
    let command = args.command.join(" ");
    let invocation =
        machine::run_command(shell, &app.reporter(), &command, args.vm.as_deref()).await?;
    app.renderer().command_output(&invocation)?;
    Ok(invocation.exit_code)
}
