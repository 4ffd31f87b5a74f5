//! Application context: unified state passed to every command handler.
//!
//! `AppContext` carries output settings, the loaded configuration, and the
//! flags that shape how vagrant is driven. The Vagrant controller itself is
//! built on demand so that `render`, `config` and `version` work on hosts
//! without vagrant installed.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::EvilGeniusConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::vagrant::VagrantController;
use crate::output::{
    HumanRenderer, OutputContext, Renderer, Reporter, SilentReporter, SpinnerReporter,
    TerminalReporter,
};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
#[derive(Debug, Clone, Default)]
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
    /// Skip interactive prompts (also set by `CI` / `EVILGENIUS_YES` env vars).
    pub yes: bool,
    /// Directory vagrant runs in; overrides `vagrant.root` from the config file.
    pub root: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Effective configuration.
    pub config: EvilGeniusConfig,
    /// Command-line root override.
    pub root: Option<PathBuf>,
    /// When `true`, skip interactive prompts and use defaults.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from CLI flags, loading the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn new(flags: &AppFlags, store: &impl ConfigStore) -> Result<Self> {
        Ok(Self::with_config(flags, store.load()?))
    }

    /// Construct an `AppContext` with an explicit configuration.
    #[must_use]
    pub fn with_config(flags: &AppFlags, config: EvilGeniusConfig) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("EVILGENIUS_YES").is_ok();
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            config,
            root: flags.root.clone(),
            non_interactive: flags.yes || ci_env,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json,
        }
    }

    /// Progress reporter: silent for JSON, spinners on a TTY, plain lines otherwise.
    #[must_use]
    pub fn reporter(&self) -> Reporter<'_> {
        if self.is_json() {
            Reporter::Silent(SilentReporter)
        } else if self.output.show_progress() {
            Reporter::Spinner(SpinnerReporter::default())
        } else {
            Reporter::Terminal(TerminalReporter::new(&self.output))
        }
    }

    /// Build the production Vagrant controller.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::VagrantError::ToolNotFound`] if vagrant is not
    /// on `PATH`.
    pub fn controller(&self) -> Result<VagrantController<TokioCommandRunner>> {
        VagrantController::from_config(&self.config.vagrant, self.root.clone())
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `EVILGENIUS_YES`
    /// env), returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
