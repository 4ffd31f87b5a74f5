//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::{MachineState, MachineStatus};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render a machine → state table, names left-aligned to the longest one.
    pub fn render_status(&self, statuses: &MachineStatus) {
        if statuses.is_empty() {
            self.ctx.info("No machines reported by vagrant.");
            return;
        }
        let width = statuses.keys().map(String::len).max().unwrap_or(0);
        for (name, state) in statuses {
            println!("  {name:<width$}  {}", self.styled_state(*state));
        }
    }

    /// Render a single machine's state.
    pub fn render_machine_state(&self, name: &str, state: MachineState) {
        println!("  {name}  {}", self.styled_state(state));
    }

    /// Print captured output lines verbatim (used by `ssh`).
    pub fn render_lines(&self, lines: &[String]) {
        for line in lines {
            println!("{line}");
        }
    }

    fn styled_state(&self, state: MachineState) -> String {
        state.as_str().style(self.ctx.styles.state(state)).to_string()
    }
}
