//! Toolchain backed by a real Python interpreter.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::BootConfig;
use crate::environment::{layout, EnvironmentMarker};
use crate::error::{BootError, Result};
use crate::install::PackageSpec;
use crate::shell::{display_command, execute, execute_quiet, CommandOptions};

use super::Toolchain;

/// Prints the installed version of the distribution named in `argv[1]`.
const VERSION_QUERY: &str =
    "import sys, importlib.metadata as m; print(m.version(sys.argv[1]))";

/// Drives `python -m venv`, `python -m pip`, and `importlib.metadata`.
#[derive(Debug, Clone)]
pub struct PythonToolchain {
    /// Interpreter used to create new environments.
    base_python: PathBuf,
    /// Interpreter of the active environment, if one is active.
    env_python: Option<PathBuf>,
}

impl PythonToolchain {
    /// Build a toolchain for the given configuration and environment state.
    ///
    /// Commands run in the current directory, so a relative environment path
    /// handed to [`Toolchain::create_environment`] is created exactly where
    /// the caller resolved it.
    pub fn new(config: &BootConfig, marker: &EnvironmentMarker) -> Self {
        Self {
            base_python: PathBuf::from(&config.python),
            env_python: marker.env_root().map(layout::interpreter),
        }
    }

    /// Interpreter used for installs and version lookups.
    ///
    /// Falls back to the base interpreter when no environment is active.
    pub fn interpreter(&self) -> &Path {
        self.env_python.as_deref().unwrap_or(&self.base_python)
    }

    /// Arguments for the single install call.
    pub fn install_args(packages: &[PackageSpec], upgrade_pip: bool) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
        if upgrade_pip {
            args.push("--upgrade".to_string());
            args.push("pip".to_string());
        }
        args.extend(packages.iter().map(|p| p.requirement().to_string()));
        args
    }
}

impl Toolchain for PythonToolchain {
    fn create_environment(&self, env_dir: &Path) -> Result<()> {
        let args = [OsStr::new("-m"), OsStr::new("venv"), env_dir.as_os_str()];
        let result = execute(&self.base_python, &args, &CommandOptions::default())?;
        if !result.success {
            return Err(BootError::EnvCreationFailed {
                path: env_dir.to_path_buf(),
                code: result.exit_code,
            });
        }
        Ok(())
    }

    fn install(&self, packages: &[PackageSpec], upgrade_pip: bool) -> Result<()> {
        let args = Self::install_args(packages, upgrade_pip);
        let result = execute(self.interpreter(), &args, &CommandOptions::default())?;
        if !result.success {
            return Err(BootError::InstallFailed {
                command: display_command(self.interpreter(), &args),
                code: result.exit_code,
            });
        }
        Ok(())
    }

    fn installed_version(&self, package: &str) -> Result<String> {
        let result = execute_quiet(self.interpreter(), &["-c", VERSION_QUERY, package])?;

        let version = result.stdout.trim();
        if !result.success || version.is_empty() {
            tracing::debug!(
                "Version lookup for '{}' failed: {}",
                package,
                result.stderr.trim()
            );
            return Err(BootError::MetadataNotFound {
                package: package.to_string(),
            });
        }

        Ok(version.to_string())
    }
}
