//! Command implementations

pub mod config;
pub mod lifecycle;
pub mod render;
pub mod ssh;
pub mod status;
pub mod version;

use clap::Args;

/// Optional machine name shared by `init`, `up` and `destroy`.
#[derive(Args, Debug, Clone, Default)]
pub struct MachineArgs {
    /// Machine to target (default: every machine in the Vagrantfile)
    pub vm: Option<String>,
}
