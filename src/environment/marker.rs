//! Active-environment detection.
//!
//! A Python virtual environment announces itself through `VIRTUAL_ENV`,
//! which its activation script exports. The variable is read once at
//! startup and passed around as an explicit value.

use std::path::{Path, PathBuf};

/// Variable set by an activated virtual environment.
pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";

/// Whether an isolated environment is active, and where it lives.
///
/// # Example
///
/// ```
/// use envboot::environment::EnvironmentMarker;
///
/// let marker = EnvironmentMarker::from_lookup(|_| Some("/work/.venv".to_string()));
/// assert!(marker.is_active());
///
/// let marker = EnvironmentMarker::from_lookup(|_| None);
/// assert!(!marker.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvironmentMarker {
    env_root: Option<PathBuf>,
}

impl EnvironmentMarker {
    /// Read the marker from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the marker through a variable lookup. Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_root = lookup(VIRTUAL_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self { env_root }
    }

    /// Marker for an active environment rooted at `root`.
    pub fn active(root: impl Into<PathBuf>) -> Self {
        Self {
            env_root: Some(root.into()),
        }
    }

    /// Marker for no active environment.
    pub fn inactive() -> Self {
        Self { env_root: None }
    }

    pub fn is_active(&self) -> bool {
        self.env_root.is_some()
    }

    /// Root directory of the active environment.
    pub fn env_root(&self) -> Option<&Path> {
        self.env_root.as_deref()
    }
}
