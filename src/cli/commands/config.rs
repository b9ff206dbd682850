//! Config command implementation.
//!
//! The `envboot config` command shows the resolved configuration: defaults,
//! then the project file, then environment overrides.

use crate::cli::args::ConfigArgs;
use crate::config::BootConfig;
use crate::error::{BootError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    args: ConfigArgs,
    config: BootConfig,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(args: ConfigArgs, config: BootConfig) -> Self {
        Self { args, config }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rendered = if self.args.json {
            serde_json::to_string_pretty(&self.config).map_err(|e| BootError::Other(e.into()))?
        } else {
            serde_yaml::to_string(&self.config).map_err(|e| BootError::Other(e.into()))?
        };

        ui.emit(rendered.trim_end());
        Ok(CommandResult::success())
    }
}
