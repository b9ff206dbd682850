//! Error types for envboot operations.
//!
//! This module defines [`BootError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Nothing is retried or recovered locally; every failure aborts the run
//! - Failures of external tools carry the command line and exit code
//! - [`BootError::VersionTooLow`] is an expected outcome of the version check,
//!   distinct from lookup or execution failures

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envboot operations.
#[derive(Debug, Error)]
pub enum BootError {
    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external program could not be started at all.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawnFailed { command: String, message: String },

    /// Creating the virtual environment returned a non-zero status.
    #[error("Failed to create environment at {path} (exit code {code:?})")]
    EnvCreationFailed { path: PathBuf, code: Option<i32> },

    /// The package manager returned a non-zero status.
    #[error("Package installation failed with exit code {code:?}: {command}")]
    InstallFailed { command: String, code: Option<i32> },

    /// No installed distribution matched the package name.
    #[error("No installed version found for package '{package}'")]
    MetadataNotFound { package: String },

    /// A version string could not be read as `major.minor`.
    #[error("Cannot parse version '{version}': {message}")]
    VersionParse { version: String, message: String },

    /// The installed version is below the required minimum.
    #[error("{package} >= {minimum}.x required (found {found})")]
    VersionTooLow {
        package: String,
        found: String,
        minimum: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envboot operations.
pub type Result<T> = std::result::Result<T, BootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = BootError::ConfigParseError {
            path: PathBuf::from("/project/.envboot.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/.envboot.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn env_creation_failed_displays_path_and_code() {
        let err = BootError::EnvCreationFailed {
            path: PathBuf::from(".venv"),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains(".venv"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn install_failed_displays_command() {
        let err = BootError::InstallFailed {
            command: "python -m pip install numpy".into(),
            code: Some(2),
        };
        assert!(err.to_string().contains("python -m pip install numpy"));
    }

    #[test]
    fn metadata_not_found_displays_package() {
        let err = BootError::MetadataNotFound {
            package: "torch".into(),
        };
        assert!(err.to_string().contains("'torch'"));
    }

    #[test]
    fn version_too_low_names_the_minimum() {
        let err = BootError::VersionTooLow {
            package: "torch".into(),
            found: "2.1.5".into(),
            minimum: "2.2".into(),
        };
        assert_eq!(err.to_string(), "torch >= 2.2.x required (found 2.1.5)");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BootError = io_err.into();
        assert!(matches!(err, BootError::Io(_)));
    }
}
