//! Package requirement strings.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{BootError, Result};

static DISTRIBUTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*").unwrap());

/// Packages installed when no configuration says otherwise.
pub const DEFAULT_PACKAGES: [&str; 4] = ["numpy", "pandas", "torch", "transformers"];

/// A requirement as handed to the package manager.
///
/// The requirement may carry extras or a version specifier
/// (`torch==2.2.1`, `transformers[torch]>=4.40`). The distribution name in
/// front of those is what the version report is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageSpec {
    requirement: String,
    name_len: usize,
}

impl PackageSpec {
    /// Parse a requirement string.
    pub fn parse(requirement: &str) -> Result<Self> {
        let requirement = requirement.trim();
        let name_len = DISTRIBUTION_NAME
            .find(requirement)
            .map(|m| m.end())
            .ok_or_else(|| BootError::ConfigValidationError {
                message: format!("'{}' is not a valid package requirement", requirement),
            })?;

        Ok(Self {
            requirement: requirement.to_string(),
            name_len,
        })
    }

    /// The full requirement string.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// The distribution name used for metadata lookup and as report key.
    pub fn name(&self) -> &str {
        &self.requirement[..self.name_len]
    }

    /// The default package list, in order.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_PACKAGES
            .iter()
            .map(|name| Self {
                requirement: (*name).to_string(),
                name_len: name.len(),
            })
            .collect()
    }
}

impl FromStr for PackageSpec {
    type Err = BootError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackageSpec {
    type Error = BootError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PackageSpec> for String {
    fn from(spec: PackageSpec) -> Self {
        spec.requirement
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.requirement)
    }
}
