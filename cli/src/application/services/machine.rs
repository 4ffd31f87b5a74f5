//! Application service: machine lifecycle use-cases.
//!
//! Wraps the raw provisioner calls with progress reporting. Non-zero exit
//! codes are reported as warnings and handed back to the caller; whether they
//! are fatal is the caller's (or the controller's exit policy's) decision.

use anyhow::Result;

use crate::application::ports::{
    MachineLifecycle, ProcessInvocation, ProgressReporter, RemoteShell,
};

fn target(vm: Option<&str>) -> String {
    vm.map_or_else(|| "all machines".to_string(), |name| format!("'{name}'"))
}

fn report_outcome(reporter: &impl ProgressReporter, invocation: &ProcessInvocation, done: &str) {
    if invocation.success() {
        reporter.success(done);
    } else {
        reporter.warn(&format!(
            "`{}` exited with code {}",
            invocation.command_line(),
            invocation.exit_code
        ));
    }
}

/// Create a Vagrantfile skeleton in the working directory.
pub async fn init(
    provisioner: &impl MachineLifecycle,
    reporter: &impl ProgressReporter,
    vm: Option<&str>,
) -> Result<ProcessInvocation> {
    reporter.step("Initializing Vagrant environment...");
    let invocation = provisioner.init(vm).await?;
    report_outcome(reporter, &invocation, "Vagrant environment initialized");
    Ok(invocation)
}

/// Create and boot machines.
pub async fn up(
    provisioner: &impl MachineLifecycle,
    reporter: &impl ProgressReporter,
    vm: Option<&str>,
) -> Result<ProcessInvocation> {
    reporter.step(&format!("Bringing up {}...", target(vm)));
    let invocation = provisioner.up(vm).await?;
    report_outcome(reporter, &invocation, &format!("{} up", target(vm)));
    Ok(invocation)
}

/// Destroy machines without Vagrant's interactive confirmation.
pub async fn destroy(
    provisioner: &impl MachineLifecycle,
    reporter: &impl ProgressReporter,
    vm: Option<&str>,
) -> Result<ProcessInvocation> {
    reporter.step(&format!("Destroying {}...", target(vm)));
    let invocation = provisioner.destroy(vm).await?;
    report_outcome(reporter, &invocation, &format!("{} destroyed", target(vm)));
    Ok(invocation)
}

/// Run a shell command inside a machine and return its output.
pub async fn run_command(
    shell: &impl RemoteShell,
    reporter: &impl ProgressReporter,
    command: &str,
    vm: Option<&str>,
) -> Result<ProcessInvocation> {
    let invocation = shell.run_command(command, vm).await?;
    if !invocation.success() {
        reporter.warn(&format!(
            "command exited with code {} on {}",
            invocation.exit_code,
            target(vm)
        ));
    }
    Ok(invocation)
}
