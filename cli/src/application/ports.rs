//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::domain::{MachineState, MachineStatus, VagrantError};

// ── Value Types ───────────────────────────────────────────────────────────────

/// One finished run of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    /// Resolved executable path.
    pub program: PathBuf,
    /// Arguments passed after the program.
    pub args: Vec<String>,
    /// Working directory the program ran in.
    pub cwd: PathBuf,
    /// Combined stdout/stderr lines in receipt order, without line endings.
    pub lines: Vec<String>,
    /// Exit code, or `-1` when the process was killed by a signal.
    pub exit_code: i32,
}

impl ProcessInvocation {
    /// `true` when the program exited with code 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Program and arguments joined for display, e.g. `vagrant up web1`.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut out = self.program.display().to_string();
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}

// ── Logging Port ──────────────────────────────────────────────────────────────

/// Receives every output line of a running program as it is read.
///
/// Called from the reader task, so implementations must be thread-safe.
pub trait OutputSink: Send + Sync {
    fn line(&self, line: &str);
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program args...` in `cwd` with stderr merged into stdout.
    ///
    /// Each output line is handed to `sink` as soon as it is read and also
    /// collected into the returned [`ProcessInvocation`].
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, or if the runner
    /// enforces a timeout and the process exceeds it.
    async fn run(
        &self,
        program: &Path,
        args: &[&str],
        cwd: &Path,
        sink: Arc<dyn OutputSink>,
    ) -> Result<ProcessInvocation>;
}

// ── Vagrant Port Traits ───────────────────────────────────────────────────────

/// Machine lifecycle operations, each optionally scoped to one machine.
#[allow(async_fn_in_trait)]
pub trait MachineLifecycle {
    /// `vagrant init [vm]`
    async fn init(&self, vm: Option<&str>) -> Result<ProcessInvocation>;
    /// `vagrant up [vm]`
    async fn up(&self, vm: Option<&str>) -> Result<ProcessInvocation>;
    /// `vagrant destroy [vm] --force`
    async fn destroy(&self, vm: Option<&str>) -> Result<ProcessInvocation>;
}

/// Command execution inside a machine.
#[allow(async_fn_in_trait)]
pub trait RemoteShell {
    /// `vagrant ssh [vm] -c <command>`; the guest's output is in `lines`.
    async fn run_command(&self, command: &str, vm: Option<&str>) -> Result<ProcessInvocation>;
}

/// Machine state inspection.
#[allow(async_fn_in_trait)]
pub trait MachineInspector {
    /// Parse `vagrant status` into a name → state map.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::StatusParseError`] (inside `anyhow`) when an
    /// entry line cannot be parsed.
    async fn status(&self) -> Result<MachineStatus>;

    /// State of a single machine.
    ///
    /// # Errors
    ///
    /// Returns [`VagrantError::UnknownMachine`] if `vm` is not listed.
    async fn status_of(&self, vm: &str) -> Result<MachineState> {
        let statuses = self.status().await?;
        statuses
            .get(vm)
            .copied()
            .ok_or_else(|| VagrantError::UnknownMachine(vm.to_string()).into())
    }
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when absent.
    fn load(&self) -> Result<crate::domain::EvilGeniusConfig>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts writing generated files so services can be tested without disk I/O.
pub trait FileWriter {
    /// Replace `path` with `contents`.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
