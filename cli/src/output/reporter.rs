//! `ProgressReporter` implementations: plain lines, spinners, or nothing.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ! {message}"` to stderr (never suppressed)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.info));
        }
    }

    fn success(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".style(self.ctx.styles.success));
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("  {} {message}", "!".style(self.ctx.styles.warning));
    }
}

/// Reporter for `--json` mode: progress goes nowhere, stdout stays parseable.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// Reporter for interactive terminals: each step runs under a spinner that
/// the following `success`/`warn` finishes.
#[derive(Default)]
pub struct SpinnerReporter {
    current: RefCell<Option<ProgressBar>>,
}

impl ProgressReporter for SpinnerReporter {
    fn step(&self, message: &str) {
        if let Some(pb) = self.current.replace(Some(progress::spinner(message))) {
            pb.finish_and_clear();
        }
    }

    fn success(&self, message: &str) {
        match self.current.take() {
            Some(pb) => progress::finish_success(&pb, message),
            None => println!("  ✓ {message}"),
        }
    }

    fn warn(&self, message: &str) {
        match self.current.take() {
            Some(pb) => progress::finish_error(&pb, message),
            None => eprintln!("  ! {message}"),
        }
    }
}

/// Reporter chosen from the output mode and terminal capabilities.
pub enum Reporter<'a> {
    Spinner(SpinnerReporter),
    Terminal(TerminalReporter<'a>),
    Silent(SilentReporter),
}

impl ProgressReporter for Reporter<'_> {
    fn step(&self, message: &str) {
        match self {
            Self::Spinner(r) => r.step(message),
            Self::Terminal(r) => r.step(message),
            Self::Silent(r) => r.step(message),
        }
    }

    fn success(&self, message: &str) {
        match self {
            Self::Spinner(r) => r.success(message),
            Self::Terminal(r) => r.success(message),
            Self::Silent(r) => r.success(message),
        }
    }

    fn warn(&self, message: &str) {
        match self {
            Self::Spinner(r) => r.warn(message),
            Self::Terminal(r) => r.warn(message),
            Self::Silent(r) => r.warn(message),
        }
    }
}
