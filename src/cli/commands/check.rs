//! Check command implementation.
//!
//! `envboot check` asserts that a package is installed at or above a
//! `major.minor` floor. A version below the floor is reported and exits 1;
//! a package that is not installed at all is an error.

use crate::cli::args::CheckArgs;
use crate::config::BootConfig;
use crate::environment::EnvironmentMarker;
use crate::error::{BootError, Result};
use crate::toolchain::Toolchain;
use crate::ui::UserInterface;
use crate::version::check_minimum_version;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    config: BootConfig,
    marker: EnvironmentMarker,
    toolchain: Box<dyn Toolchain>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(
        args: CheckArgs,
        config: BootConfig,
        marker: EnvironmentMarker,
        toolchain: Box<dyn Toolchain>,
    ) -> Self {
        Self {
            args,
            config,
            marker,
            toolchain,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let package = self
            .args
            .package
            .as_deref()
            .unwrap_or(&self.config.minimum.package);
        let minimum = self.args.minimum.unwrap_or(self.config.minimum.version);

        if !self.marker.is_active() {
            ui.warning("No virtual environment is active; checking the base interpreter");
        }

        match check_minimum_version(package, minimum, self.toolchain.as_ref()) {
            Ok(check) => {
                ui.success(&format!(
                    "{} {} satisfies >= {}",
                    check.package, check.found, check.minimum
                ));
                Ok(CommandResult::success())
            }
            Err(e @ BootError::VersionTooLow { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
