//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Vagrant errors ────────────────────────────────────────────────────────────

/// Errors surfaced by the Vagrant process controller.
#[derive(Debug, Error)]
pub enum VagrantError {
    #[error(
        "{tool} does not appear to be installed.\n\
         Please download and install a copy of it here: https://www.vagrantup.com/downloads"
    )]
    ToolNotFound { tool: String },

    #[error("Machine '{0}' not found in vagrant status output.")]
    UnknownMachine(String),

    #[error("`{command}` exited with code {code}")]
    ProcessFailed { command: String, code: i32 },

    #[error("`{command}` timed out after {secs}s")]
    Timeout { command: String, secs: u64 },

    #[error(transparent)]
    StatusParse(#[from] StatusParseError),
}

/// A non-blank entry line in `vagrant status` output that does not match
/// `<name> <state>[ (<provider>)]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse machine name and state from line: {line:?}")]
pub struct StatusParseError {
    /// The offending line, verbatim.
    pub line: String,
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration and machine manifests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Manifest defines no machines.")]
    EmptyManifest,

    #[error("Duplicate machine name '{0}' in manifest (after removing '-').")]
    DuplicateMachine(String),
}
