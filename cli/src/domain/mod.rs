//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod machine;
pub mod network;
pub mod status;

pub use config::{EvilGeniusConfig, ExitPolicy, MachineSpec, Manifest, VagrantConfig};
pub use error::{ConfigError, StatusParseError, VagrantError};
pub use machine::{ManagedMachine, NetworkInterface, render_vagrantfile};
pub use network::InternalNetwork;
pub use status::{MachineState, MachineStatus, parse_status};
