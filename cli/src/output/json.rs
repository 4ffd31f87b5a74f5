//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON document
//! to stdout.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::ProcessInvocation;
use crate::domain::{ConfigError, MachineState, MachineStatus, VagrantError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for an error, used in `--json` error output.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(err) = err.downcast_ref::<VagrantError>() {
        return match err {
            VagrantError::ToolNotFound { .. } => "TOOL_NOT_FOUND",
            VagrantError::UnknownMachine(_) => "UNKNOWN_MACHINE",
            VagrantError::ProcessFailed { .. } => "PROCESS_FAILED",
            VagrantError::Timeout { .. } => "TIMEOUT",
            VagrantError::StatusParse(_) => "STATUS_PARSE",
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "INVALID_MANIFEST";
    }
    "ERROR"
}

/// Format the full machine status map, e.g. `{"machines": {"web1": "running"}}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_status(statuses: &MachineStatus) -> Result<String> {
    #[derive(Serialize)]
    struct Out<'a> {
        machines: &'a MachineStatus,
    }
    serde_json::to_string_pretty(&Out { machines: statuses }).context("JSON serialization failed")
}

/// Format a single machine's state.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_machine_state(name: &str, state: MachineState) -> Result<String> {
    let obj = serde_json::json!({ "name": name, "state": state });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a finished vagrant run.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_invocation(invocation: &ProcessInvocation) -> Result<String> {
    let obj = serde_json::json!({
        "command": invocation.command_line(),
        "cwd": invocation.cwd.display().to_string(),
        "exit_code": invocation.exit_code,
        "output": invocation.lines,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
