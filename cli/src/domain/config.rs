//! Domain types for CLI configuration and machine manifests.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::machine::{DEFAULT_BOX, ManagedMachine, sanitize_name};
use crate::domain::network::InternalNetwork;

/// Executable looked up on `PATH` when none is configured.
pub const DEFAULT_EXECUTABLE: &str = "vagrant";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.evilgenius/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EvilGeniusConfig {
    /// Vagrant invocation settings.
    pub vagrant: VagrantConfig,
}

/// How a non-zero Vagrant exit code is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPolicy {
    /// Return the exit code to the caller in the invocation result.
    #[default]
    ReturnCode,
    /// Turn a non-zero exit code into an error.
    Fail,
}

/// Vagrant invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VagrantConfig {
    /// Executable name or path.
    pub executable: String,
    /// Directory vagrant runs in (where the Vagrantfile lives).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Non-zero exit handling.
    pub exit_policy: ExitPolicy,
    /// Kill vagrant after this many seconds. Unset means wait forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for VagrantConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            root: None,
            exit_policy: ExitPolicy::default(),
            timeout_secs: None,
        }
    }
}

// ── Machine manifest ─────────────────────────────────────────────────────────

/// A YAML document listing machines to render into a Vagrantfile.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Manifest {
    pub machines: Vec<MachineSpec>,
}

/// One machine entry of a [`Manifest`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MachineSpec {
    pub name: String,
    #[serde(default = "default_box", rename = "box")]
    pub box_name: String,
    #[serde(default)]
    pub before_install: Vec<String>,
    #[serde(default)]
    pub install: Vec<String>,
    #[serde(default)]
    pub after_install: Vec<String>,
    #[serde(default)]
    pub network_scripts: Vec<String>,
    #[serde(default)]
    pub script_folder: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<InternalNetwork>,
}

fn default_box() -> String {
    DEFAULT_BOX.to_string()
}

impl MachineSpec {
    /// Build the renderable machine.
    #[must_use]
    pub fn to_machine(&self) -> ManagedMachine {
        let mut builder = ManagedMachine::builder(&self.name)
            .box_name(self.box_name.clone())
            .before_install(self.before_install.clone())
            .install(self.install.clone())
            .after_install(self.after_install.clone())
            .network_scripts(self.network_scripts.clone());
        if let Some(folder) = &self.script_folder {
            builder = builder.script_folder(folder.clone());
        }
        for iface in &self.interfaces {
            builder = builder.interface(Box::new(iface.clone()));
        }
        builder.build()
    }
}

impl Manifest {
    /// Validate the manifest and build its machines in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is empty or two names collide once
    /// `-` is stripped.
    pub fn to_machines(&self) -> Result<Vec<ManagedMachine>> {
        if self.machines.is_empty() {
            return Err(ConfigError::EmptyManifest.into());
        }
        let mut seen = HashSet::new();
        for spec in &self.machines {
            let name = sanitize_name(&spec.name);
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateMachine(name).into());
            }
        }
        Ok(self.machines.iter().map(MachineSpec::to_machine).collect())
    }
}
