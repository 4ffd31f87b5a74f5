//! Terminal stylesheet built on owo-colors.

use owo_colors::Style;

use crate::domain::MachineState;

/// Colors for CLI output. `Default` is the plain, uncolored sheet.
#[derive(Default, Clone)]
pub struct Styles {
    /// Completed steps, running machines
    pub success: Style,
    /// Stopped or suspended machines
    pub warning: Style,
    /// Failures, aborted machines
    pub error: Style,
    /// Progress arrows and informational notes
    pub info: Style,
    /// Machines that do not exist yet
    pub dim: Style,
}

impl Styles {
    /// Switch every entry to its terminal color.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red().bold();
        self.info = Style::new().cyan();
        self.dim = Style::new().dimmed();
    }

    /// Style for a machine's lifecycle state.
    #[must_use]
    pub fn state(&self, state: MachineState) -> Style {
        match state {
            MachineState::Running => self.success,
            MachineState::Aborted => self.error,
            MachineState::NotCreated => self.dim,
            MachineState::PowerOff | MachineState::Saved => self.warning,
        }
    }
}
