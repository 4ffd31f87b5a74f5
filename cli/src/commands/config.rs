//! `evilgenius config show|path`: inspect configuration.

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the configuration file location
    Path,
}

/// Run a config subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be determined or serialization fails.
pub fn run(app: &AppContext, store: &impl ConfigStore, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            if app.is_json() {
                let out = serde_json::to_string_pretty(&app.config)
                    .context("JSON serialization failed")?;
                println!("{out}");
            } else {
                let out = serde_yaml::to_string(&app.config).context("cannot serialize config")?;
                print!("{out}");
            }
        }
        ConfigCommand::Path => {
            let path = store.path()?;
            if app.is_json() {
                println!("{}", serde_json::json!({ "path": path.display().to_string() }));
            } else {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
