//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::AtomicFileWriter;

/// Generate Vagrantfiles and drive Vagrant-managed machines
#[derive(Parser)]
#[command(
    name = "evilgenius",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Log every vagrant output line (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Directory containing the Vagrantfile (default: config, then current directory)
    #[arg(long, global = true, env = "EVILGENIUS_ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a Vagrantfile skeleton (`vagrant init`)
    Init(commands::MachineArgs),

    /// Create and boot machines (`vagrant up`)
    Up(commands::MachineArgs),

    /// Destroy machines (`vagrant destroy --force`)
    Destroy(commands::MachineArgs),

    /// Run a shell command inside a machine (`vagrant ssh -c`)
    Ssh(commands::ssh::SshArgs),

    /// Show machine states (`vagrant status`)
    Status(commands::status::StatusArgs),

    /// Render a machine manifest into a Vagrantfile
    Render(commands::render::RenderArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command and return the process exit code.
    ///
    /// Commands that run vagrant return its exit code; the rest return 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<i32> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            yes,
            root,
            command,
        } = self;

        let flags = AppFlags {
            no_color,
            quiet,
            json,
            yes,
            root,
        };
        let store = YamlConfigStore;
        // `version` must work even when the config file is broken.
        let load = || AppContext::new(&flags, &store);

        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(0)
            }
            Command::Init(args) => {
                let app = load()?;
                commands::lifecycle::init(&app, &app.controller()?, &args).await
            }
            Command::Up(args) => {
                let app = load()?;
                commands::lifecycle::up(&app, &app.controller()?, &args).await
            }
            Command::Destroy(args) => {
                let app = load()?;
                commands::lifecycle::destroy(&app, &app.controller()?, &args).await
            }
            Command::Ssh(args) => {
                let app = load()?;
                commands::ssh::run(&app, &app.controller()?, &args).await
            }
            Command::Status(args) => {
                let app = load()?;
                commands::status::run(&app, &app.controller()?, &args).await?;
                Ok(0)
            }
            Command::Render(args) => {
                commands::render::run(&load()?, &AtomicFileWriter, &args)?;
                Ok(0)
            }
            Command::Config(cmd) => {
                commands::config::run(&load()?, &store, &cmd)?;
                Ok(0)
            }
        }
    }
}
