//! Application service: render a machine manifest into a Vagrantfile.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{FileWriter, ProgressReporter};
use crate::domain::{Manifest, render_vagrantfile};

/// Parse a YAML manifest and render the full Vagrantfile text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or the manifest is invalid.
pub fn render_manifest(yaml: &str) -> Result<String> {
    let manifest: Manifest = serde_yaml::from_str(yaml).context("cannot parse machine manifest")?;
    let machines = manifest.to_machines()?;
    Ok(render_vagrantfile(&machines))
}

/// Render `yaml` and write the result to `dest`.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_vagrantfile(
    yaml: &str,
    dest: &Path,
    writer: &impl FileWriter,
    reporter: &impl ProgressReporter,
) -> Result<String> {
    let text = render_manifest(yaml)?;
    writer.write(dest, &text)?;
    reporter.success(&format!("Wrote {}", dest.display()));
    Ok(text)
}
