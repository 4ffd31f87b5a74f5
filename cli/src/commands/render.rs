//! `evilgenius render <MANIFEST> [--output PATH]`: generate a Vagrantfile.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::FileWriter;
use crate::application::services::vagrantfile;

/// Arguments for the render command.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// YAML manifest listing the machines
    pub manifest: PathBuf,

    /// Write the Vagrantfile here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run `evilgenius render`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or rendered, or the
/// output file cannot be written.
pub fn run(app: &AppContext, writer: &impl FileWriter, args: &RenderArgs) -> Result<()> {
    let yaml = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("cannot read {}", args.manifest.display()))?;
    match &args.output {
        Some(dest) => {
            vagrantfile::write_vagrantfile(&yaml, dest, writer, &app.reporter())?;
        }
        None => print!("{}", vagrantfile::render_manifest(&yaml)?),
    }
    Ok(())
}
