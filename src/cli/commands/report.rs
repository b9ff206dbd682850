//! Report command implementation.
//!
//! `envboot report` prints the installed versions of the configured
//! packages without installing anything.

use crate::config::BootConfig;
use crate::environment::EnvironmentMarker;
use crate::error::Result;
use crate::install::collect_report;
use crate::toolchain::Toolchain;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand {
    config: BootConfig,
    marker: EnvironmentMarker,
    toolchain: Box<dyn Toolchain>,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(config: BootConfig, marker: EnvironmentMarker, toolchain: Box<dyn Toolchain>) -> Self {
        Self {
            config,
            marker,
            toolchain,
        }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.marker.is_active() {
            ui.warning("No virtual environment is active; reporting the base interpreter");
        }

        let mut spinner = ui.start_spinner("Resolving installed versions");
        let report = match collect_report(&self.config.packages, self.toolchain.as_ref()) {
            Ok(report) => {
                spinner.finish_success(&format!("Resolved {} package(s)", report.len()));
                report
            }
            Err(e) => {
                spinner.finish_error("Version lookup failed");
                return Err(e);
            }
        };

        ui.emit(&report.to_pretty_json()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootError;
    use crate::toolchain::FakeToolchain;
    use crate::ui::{MockUI, SpinnerStatus};

    #[test]
    fn prints_report_without_installing() {
        let toolchain = FakeToolchain::new()
            .with_version("numpy", "1.26.4")
            .with_version("pandas", "2.2.2")
            .with_version("torch", "2.3.0")
            .with_version("transformers", "4.41.2");
        let cmd = ReportCommand::new(
            BootConfig::default(),
            EnvironmentMarker::active("/env"),
            Box::new(toolchain),
        );
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);

        let json = ui.emitted().remove(0);
        assert!(json.starts_with("{\n  \"numpy\": \"1.26.4\""));
        assert_eq!(ui.spinner_statuses(), [Some(SpinnerStatus::Success)]);
    }

    #[test]
    fn missing_package_fails_spinner_and_propagates() {
        let toolchain = FakeToolchain::new().with_version("numpy", "1.26.4");
        let cmd = ReportCommand::new(
            BootConfig::default(),
            EnvironmentMarker::active("/env"),
            Box::new(toolchain),
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, BootError::MetadataNotFound { ref package } if package == "pandas"));
        assert_eq!(ui.spinner_statuses(), [Some(SpinnerStatus::Error)]);
        assert!(ui.emitted().is_empty());
    }
}
