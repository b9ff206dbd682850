//! The package version report.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;

/// Installed versions keyed by package name, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionReport {
    entries: Vec<(String, String)>,
}

impl VersionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Order of insertion is the order of output.
    pub fn push(&mut self, package: impl Into<String>, version: impl Into<String>) {
        self.entries.push((package.into(), version.into()));
    }

    /// Look up the version reported for a package.
    pub fn get(&self, package: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == package)
            .map(|(_, version)| version.as_str())
    }

    /// Package names in report order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a JSON object with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::Error::from(e).into())
    }
}

impl Serialize for VersionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (package, version) in &self.entries {
            map.serialize_entry(package, version)?;
        }
        map.end()
    }
}
