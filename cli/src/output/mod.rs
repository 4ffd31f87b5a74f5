//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use reporter::{Reporter, SilentReporter, SpinnerReporter, TerminalReporter};
pub use styles::Styles;

use crate::application::ports::ProcessInvocation;
use crate::domain::{MachineState, MachineStatus};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json,
}

impl Renderer<'_> {
    /// Render the full status map.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn status(&self, statuses: &MachineStatus) -> Result<()> {
        match self {
            Self::Human(r) => r.render_status(statuses),
            Self::Json => println!("{}", json::format_status(statuses)?),
        }
        Ok(())
    }

    /// Render one machine's state.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn machine_state(&self, name: &str, state: MachineState) -> Result<()> {
        match self {
            Self::Human(r) => r.render_machine_state(name, state),
            Self::Json => println!("{}", json::format_machine_state(name, state)?),
        }
        Ok(())
    }

    /// Render a finished vagrant run. Human mode prints nothing: progress
    /// was already reported and the output went to the log.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn invocation(&self, invocation: &ProcessInvocation) -> Result<()> {
        if let Self::Json = self {
            println!("{}", json::format_invocation(invocation)?);
        }
        Ok(())
    }

    /// Render the captured output of a guest command.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn command_output(&self, invocation: &ProcessInvocation) -> Result<()> {
        match self {
            Self::Human(r) => r.render_lines(&invocation.lines),
            Self::Json => println!("{}", json::format_invocation(invocation)?),
        }
        Ok(())
    }
}
