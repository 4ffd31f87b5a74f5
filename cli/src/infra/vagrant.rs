//! Infrastructure implementation of the Vagrant port traits.
//!
//! `VagrantController<R>` builds the argument list for each supported
//! subcommand and routes every call through a `CommandRunner`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::{
    CommandRunner, MachineInspector, MachineLifecycle, OutputSink, ProcessInvocation, RemoteShell,
};
use crate::domain::{ExitPolicy, MachineStatus, VagrantConfig, VagrantError, parse_status};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::locate::find_executable;
use crate::infra::log_sink::TracingSink;

/// Infrastructure adapter that drives the `vagrant` executable.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct VagrantController<R: CommandRunner> {
    runner: R,
    executable: PathBuf,
    root: PathBuf,
    sink: Arc<dyn OutputSink>,
    exit_policy: ExitPolicy,
}

impl<R: CommandRunner> VagrantController<R> {
    /// Create a controller for an already-resolved executable.
    pub fn new(runner: R, executable: PathBuf, root: PathBuf, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            runner,
            executable,
            root,
            sink,
            exit_policy: ExitPolicy::default(),
        }
    }

    /// Resolve the working directory and look the executable up on `PATH`.
    ///
    /// `root` falls back to the current directory when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`VagrantError::ToolNotFound`] if the executable is not on
    /// `PATH`, or an error if the current directory cannot be determined.
    pub fn locate(
        runner: R,
        executable: &str,
        root: Option<PathBuf>,
        sink: Arc<dyn OutputSink>,
    ) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        let resolved = find_executable(executable).ok_or_else(|| VagrantError::ToolNotFound {
            tool: executable.to_string(),
        })?;
        debug!(executable = %resolved.display(), root = %root.display(), "located vagrant");
        Ok(Self::new(runner, resolved, root, sink))
    }

    /// Choose how non-zero exit codes are reported.
    #[must_use]
    pub fn with_exit_policy(mut self, exit_policy: ExitPolicy) -> Self {
        self.exit_policy = exit_policy;
        self
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run `vagrant <args>` in the configured root.
    async fn vagrant(&self, args: &[&str]) -> Result<ProcessInvocation> {
        let invocation = self
            .runner
            .run(&self.executable, args, &self.root, Arc::clone(&self.sink))
            .await
            .with_context(|| format!("vagrant {}", args.first().copied().unwrap_or_default()))?;

        if self.exit_policy == ExitPolicy::Fail && !invocation.success() {
            return Err(VagrantError::ProcessFailed {
                command: invocation.command_line(),
                code: invocation.exit_code,
            }
            .into());
        }
        Ok(invocation)
    }
}

impl VagrantController<TokioCommandRunner> {
    /// Convenience constructor for production use: tokio runner, tracing sink,
    /// settings from the config file.
    ///
    /// # Errors
    ///
    /// Returns [`VagrantError::ToolNotFound`] if the executable is not on `PATH`.
    pub fn from_config(config: &VagrantConfig, root: Option<PathBuf>) -> Result<Self> {
        let runner = TokioCommandRunner::new(
            config.timeout_secs.map(std::time::Duration::from_secs),
        );
        let root = root.or_else(|| config.root.clone());
        Ok(Self::locate(runner, &config.executable, root, Arc::new(TracingSink))?
            .with_exit_policy(config.exit_policy))
    }
}

/// `[subcommand, vm?]`
fn scoped<'a>(subcommand: &'a str, vm: Option<&'a str>) -> Vec<&'a str> {
    let mut args = vec![subcommand];
    if let Some(vm) = vm {
        args.push(vm);
    }
    args
}

impl<R: CommandRunner> MachineLifecycle for VagrantController<R> {
    async fn init(&self, vm: Option<&str>) -> Result<ProcessInvocation> {
        self.vagrant(&scoped("init", vm)).await
    }

    async fn up(&self, vm: Option<&str>) -> Result<ProcessInvocation> {
        self.vagrant(&scoped("up", vm)).await
    }

    async fn destroy(&self, vm: Option<&str>) -> Result<ProcessInvocation> {
        // --force skips vagrant's y/N confirmation prompt.
        let mut args = scoped("destroy", vm);
        args.push("--force");
        self.vagrant(&args).await
    }
}

impl<R: CommandRunner> RemoteShell for VagrantController<R> {
    async fn run_command(&self, command: &str, vm: Option<&str>) -> Result<ProcessInvocation> {
        let mut args = scoped("ssh", vm);
        args.extend(["-c", command]);
        self.vagrant(&args).await
    }
}

impl<R: CommandRunner> MachineInspector for VagrantController<R> {
    async fn status(&self) -> Result<MachineStatus> {
        let invocation = self.vagrant(&["status"]).await?;
        let statuses = parse_status(&invocation.lines).map_err(VagrantError::from)?;
        debug!(machines = statuses.len(), "parsed vagrant status");
        Ok(statuses)
    }
}
