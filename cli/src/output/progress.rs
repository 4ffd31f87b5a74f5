//! indicatif spinners for long-running vagrant steps.

#![allow(clippy::expect_used)] // templates are literals

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner showing `msg` and the elapsed time, ticking until finished.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
            .template("  {spinner:.cyan} {msg} {elapsed:.dim}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Replace the spinner with `✓ msg`.
pub fn finish_success(pb: &ProgressBar, msg: &str) {
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {msg}")
            .expect("valid template"),
    );
    pb.finish_with_message(format!("✓ {msg}"));
}

/// Replace the spinner with `✗ msg`.
pub fn finish_error(pb: &ProgressBar, msg: &str) {
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {msg}")
            .expect("valid template"),
    );
    pb.finish_with_message(format!("✗ {msg}"));
}
