//! Environment bootstrapping.
//!
//! Either an environment is already active and nothing happens, or one is
//! created and the user has to activate it before setup can continue. A
//! child process cannot activate an environment in its parent shell, so the
//! run stops there.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::toolchain::Toolchain;

use super::layout;
use super::marker::EnvironmentMarker;

/// What the bootstrapper will do, decided from the marker alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapAction {
    /// An environment is active; continue with installation.
    Proceed,
    /// No environment is active; create one and stop.
    Create,
}

/// Decide the bootstrap action.
pub fn plan(active: bool) -> BootstrapAction {
    if active {
        BootstrapAction::Proceed
    } else {
        BootstrapAction::Create
    }
}

/// Result of [`ensure_ready`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// An environment was already active.
    Ready { env_root: PathBuf },
    /// A new environment was created and must be activated by the user.
    Created {
        env_dir: PathBuf,
        activate_script: PathBuf,
    },
}

impl BootstrapOutcome {
    /// Whether the caller should go on to install packages.
    pub fn should_continue(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Instruction shown after creating an environment.
    pub fn activation_instruction(&self) -> Option<String> {
        match self {
            Self::Created {
                activate_script, ..
            } => Some(format!(
                "Activate the environment first: {}",
                layout::activation_command(activate_script)
            )),
            Self::Ready { .. } => None,
        }
    }
}

/// Make sure an isolated environment is active, creating one at `env_dir`
/// if not.
///
/// With an active marker this has no side effects, however often it runs.
/// Creation failures propagate unchanged.
pub fn ensure_ready(
    marker: &EnvironmentMarker,
    env_dir: &Path,
    toolchain: &dyn Toolchain,
) -> Result<BootstrapOutcome> {
    match (plan(marker.is_active()), marker.env_root()) {
        (BootstrapAction::Proceed, Some(root)) => {
            tracing::debug!("Environment already active at {}", root.display());
            Ok(BootstrapOutcome::Ready {
                env_root: root.to_path_buf(),
            })
        }
        _ => {
            if env_dir.exists() {
                tracing::debug!(
                    "{} exists but is not active; recreating in place",
                    env_dir.display()
                );
            }
            tracing::info!("Creating environment at {}", env_dir.display());
            toolchain.create_environment(env_dir)?;

            Ok(BootstrapOutcome::Created {
                env_dir: env_dir.to_path_buf(),
                activate_script: layout::activate_script(env_dir),
            })
        }
    }
}
