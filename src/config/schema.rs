//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::install::PackageSpec;
use crate::version::MinimumVersion;

/// Interpreter used to create environments when nothing else is configured.
pub const DEFAULT_PYTHON: &str = if cfg!(windows) { "python" } else { "python3" };

/// Directory the environment is created in, relative to the project root.
pub const DEFAULT_ENV_DIR: &str = ".venv";

/// Resolved envboot configuration.
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootConfig {
    /// Where the environment is created.
    pub env_dir: PathBuf,

    /// Base interpreter used to create the environment.
    pub python: String,

    /// Pass `--upgrade pip` to the install call.
    pub upgrade_pip: bool,

    /// Packages to install and report, in order.
    pub packages: Vec<PackageSpec>,

    /// Version floor checked by `envboot check`.
    pub minimum: MinimumRequirement,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            env_dir: PathBuf::from(DEFAULT_ENV_DIR),
            python: DEFAULT_PYTHON.to_string(),
            upgrade_pip: true,
            packages: PackageSpec::defaults(),
            minimum: MinimumRequirement::default(),
        }
    }
}

/// A package that must be installed at or above a `major.minor` version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumRequirement {
    pub package: String,
    #[serde(with = "minimum_version_str")]
    pub version: MinimumVersion,
}

impl Default for MinimumRequirement {
    fn default() -> Self {
        Self {
            package: "torch".to_string(),
            version: MinimumVersion::new(2, 2),
        }
    }
}

mod minimum_version_str {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::version::MinimumVersion;

    pub fn serialize<S: Serializer>(v: &MinimumVersion, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(v)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<MinimumVersion, D::Error> {
        // Accept `2.2` written unquoted, which YAML reads as a float.
        let raw = serde_yaml::Value::deserialize(d)?;
        let text = match raw {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => n.to_string(),
            other => return Err(de::Error::custom(format!("expected a version, got {:?}", other))),
        };
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_setup() {
        let config = BootConfig::default();
        assert_eq!(config.env_dir, PathBuf::from(".venv"));
        assert!(config.upgrade_pip);
        assert_eq!(config.packages.len(), 4);
        assert_eq!(config.minimum.package, "torch");
        assert_eq!(config.minimum.version, MinimumVersion::new(2, 2));
    }

    #[test]
    fn empty_document_is_all_defaults() {
        let config: BootConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, BootConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_given_fields() {
        let yaml = r#"
env_dir: env
packages: [requests, "torch==2.3.0"]
"#;
        let config: BootConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.env_dir, PathBuf::from("env"));
        assert_eq!(config.packages[1].name(), "torch");
        assert_eq!(config.python, DEFAULT_PYTHON);
    }

    #[test]
    fn minimum_accepts_quoted_and_bare_versions() {
        let quoted: MinimumRequirement =
            serde_yaml::from_str("package: numpy\nversion: \"1.26\"").unwrap();
        assert_eq!(quoted.version, MinimumVersion::new(1, 26));

        let bare: MinimumRequirement = serde_yaml::from_str("package: torch\nversion: 2.3").unwrap();
        assert_eq!(bare.version, MinimumVersion::new(2, 3));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: std::result::Result<BootConfig, _> = serde_yaml::from_str("pakages: [numpy]");
        assert!(result.is_err());
    }

    #[test]
    fn minimum_serializes_as_string() {
        let yaml = serde_yaml::to_string(&MinimumRequirement::default()).unwrap();
        assert!(yaml.contains("version: '2.2'") || yaml.contains("version: \"2.2\""));
    }
}
