//! Minimum-version assertion for an installed package.

use crate::error::{BootError, Result};
use crate::toolchain::Toolchain;

use super::parse::{parse_major_minor, MinimumVersion};

/// A passed version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
    pub package: String,
    /// Installed version string as reported.
    pub found: String,
    /// `(major, minor)` read from `found`.
    pub parsed: (u32, u32),
    pub minimum: MinimumVersion,
}

/// Compare an already-known version string against a minimum.
pub fn evaluate(package: &str, found: &str, minimum: MinimumVersion) -> Result<VersionCheck> {
    let parsed = parse_major_minor(found)?;

    if !minimum.is_satisfied_by(parsed) {
        return Err(BootError::VersionTooLow {
            package: package.to_string(),
            found: found.to_string(),
            minimum: minimum.to_string(),
        });
    }

    Ok(VersionCheck {
        package: package.to_string(),
        found: found.to_string(),
        parsed,
        minimum,
    })
}

/// Check that `package` is installed at `minimum` or above.
///
/// Only major and minor are compared. A package that is not installed
/// yields [`BootError::MetadataNotFound`]; one that is too old yields
/// [`BootError::VersionTooLow`].
pub fn check_minimum_version(
    package: &str,
    minimum: MinimumVersion,
    toolchain: &dyn Toolchain,
) -> Result<VersionCheck> {
    let found = toolchain.installed_version(package)?;
    tracing::debug!("{} is installed at {}", package, found);
    evaluate(package, &found, minimum)
}
