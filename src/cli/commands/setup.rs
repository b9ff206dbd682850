//! Setup command implementation.
//!
//! `envboot` (or `envboot setup`) makes sure a virtual environment is
//! active, installs the configured packages into it, and prints their
//! versions as JSON on stdout.

use std::path::{Path, PathBuf};

use crate::config::BootConfig;
use crate::environment::{ensure_ready, layout, BootstrapOutcome, EnvironmentMarker};
use crate::error::Result;
use crate::install::install_and_report;
use crate::toolchain::Toolchain;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    config: BootConfig,
    marker: EnvironmentMarker,
    toolchain: Box<dyn Toolchain>,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(
        project_root: &Path,
        config: BootConfig,
        marker: EnvironmentMarker,
        toolchain: Box<dyn Toolchain>,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            marker,
            toolchain,
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env_dir = layout::resolve_env_dir(&self.project_root, &self.config.env_dir);

        if !self.marker.is_active() {
            ui.show_header(&format!("Creating environment at {}", env_dir.display()));
        }

        let outcome = ensure_ready(&self.marker, &env_dir, self.toolchain.as_ref())?;

        match &outcome {
            BootstrapOutcome::Created { env_dir, .. } => {
                ui.success(&format!("Created environment at {}", env_dir.display()));
                if let Some(instruction) = outcome.activation_instruction() {
                    ui.emit(&instruction);
                }
                ui.message("Run envboot again once the environment is active.");
                return Ok(CommandResult::success());
            }
            BootstrapOutcome::Ready { env_root } => {
                ui.detail(&format!("Using active environment {}", env_root.display()));
            }
        }

        ui.show_header(&format!(
            "Installing {} package(s)",
            self.config.packages.len()
        ));
        let report = install_and_report(&self.config, self.toolchain.as_ref())?;

        ui.emit(&report.to_pretty_json()?);
        ui.success("Setup complete");

        Ok(CommandResult::success())
    }
}
