//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, BootConfig};
use crate::environment::EnvironmentMarker;
use crate::error::{BootError, Result};
use crate::toolchain::{PythonToolchain, Toolchain};
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::config::ConfigCommand;
use super::report::ReportCommand;
use super::setup::SetupCommand;

/// Exit code for an unreadable or invalid configuration file.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    marker: EnvironmentMarker,
}

impl CommandDispatcher {
    /// Create a dispatcher for the given project root and environment state.
    pub fn new(project_root: PathBuf, marker: EnvironmentMarker) -> Self {
        Self {
            project_root,
            marker,
        }
    }

    fn toolchain(&self, config: &BootConfig) -> Box<dyn Toolchain> {
        Box::new(PythonToolchain::new(config, &self.marker))
    }

    /// Load configuration, then route the subcommand to its implementation.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, cli.config.as_deref()) {
            Ok(c) => c,
            Err(e @ (BootError::ConfigParseError { .. } | BootError::ConfigValidationError { .. })) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        match &cli.command {
            None | Some(Commands::Setup) => {
                let toolchain = self.toolchain(&config);
                SetupCommand::new(&self.project_root, config, self.marker.clone(), toolchain)
                    .execute(ui)
            }
            Some(Commands::Check(args)) => {
                let toolchain = self.toolchain(&config);
                CheckCommand::new(args.clone(), config, self.marker.clone(), toolchain).execute(ui)
            }
            Some(Commands::Report) => {
                let toolchain = self.toolchain(&config);
                ReportCommand::new(config, self.marker.clone(), toolchain).execute(ui)
            }
            Some(Commands::Config(args)) => ConfigCommand::new(args.clone(), config).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn invalid_config_exits_with_config_code() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".envboot.yml"), "packages: []\n").unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), EnvironmentMarker::inactive());
        let cli = Cli::parse_from(["envboot", "config"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(EXIT_CONFIG_ERROR));
        assert!(ui.has_error("at least one package"));
    }

    #[test]
    fn config_command_dispatches() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), EnvironmentMarker::inactive());
        let cli = Cli::parse_from(["envboot", "config", "--json"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_emitted("\"packages\""));
    }
}
