//! Configuration file discovery, loading, and validation.
//!
//! Resolution order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (`.envboot.yml` in the project root, or `--config`)
//! 3. Environment variables (`ENVBOOT_PYTHON`, `ENVBOOT_ENV_DIR`)

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::BootConfig;
use crate::error::{BootError, Result};

/// Project config file name.
pub const CONFIG_FILE: &str = ".envboot.yml";

/// Overrides the base interpreter.
pub const ENV_PYTHON: &str = "ENVBOOT_PYTHON";

/// Overrides the environment directory.
pub const ENV_ENV_DIR: &str = "ENVBOOT_ENV_DIR";

/// Find the project config file, if any.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// An explicitly named file that is missing is an error; an empty file is
/// treated as all defaults.
pub fn load_config_file(path: &Path) -> Result<BootConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a [`BootConfig`].
pub fn parse_config(content: &str, source_path: &Path) -> Result<BootConfig> {
    if content.trim().is_empty() {
        return Ok(BootConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| BootError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply environment variable overrides using the given lookup.
pub fn apply_env_overrides<F>(config: &mut BootConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(python) = lookup(ENV_PYTHON).filter(|v| !v.trim().is_empty()) {
        tracing::debug!("{} overrides python: {}", ENV_PYTHON, python);
        config.python = python;
    }

    if let Some(dir) = lookup(ENV_ENV_DIR).filter(|v| !v.trim().is_empty()) {
        tracing::debug!("{} overrides env_dir: {}", ENV_ENV_DIR, dir);
        config.env_dir = PathBuf::from(dir);
    }
}

/// Check invariants the rest of the crate relies on.
///
/// The version report is keyed by package name, so names must be present
/// and unique.
pub fn validate(config: &BootConfig) -> Result<()> {
    if config.packages.is_empty() {
        return Err(BootError::ConfigValidationError {
            message: "packages must list at least one package".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for spec in &config.packages {
        if !seen.insert(spec.name().to_lowercase()) {
            return Err(BootError::ConfigValidationError {
                message: format!("package '{}' is listed more than once", spec.name()),
            });
        }
    }

    if config.python.trim().is_empty() {
        return Err(BootError::ConfigValidationError {
            message: "python must not be empty".to_string(),
        });
    }

    if config.env_dir.as_os_str().is_empty() {
        return Err(BootError::ConfigValidationError {
            message: "env_dir must not be empty".to_string(),
        });
    }

    if config.minimum.package.trim().is_empty() {
        return Err(BootError::ConfigValidationError {
            message: "minimum.package must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Load, override, and validate the configuration for a project.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<BootConfig> {
    let path = match explicit {
        Some(p) if p.is_absolute() => Some(p.to_path_buf()),
        Some(p) => Some(project_root.join(p)),
        None => find_project_config(project_root),
    };

    let mut config = match &path {
        Some(p) => {
            tracing::debug!("Loading config from {}", p.display());
            load_config_file(p)?
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            BootConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::PackageSpec;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn missing_project_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        assert!(find_project_config(temp.path()).is_none());
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.packages, PackageSpec::defaults());
    }

    #[test]
    fn project_config_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "packages: [requests]\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.packages.len(), 1);
        assert_eq!(config.packages[0].name(), "requests");
    }

    #[test]
    fn explicit_relative_path_resolves_against_project_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("boot.yml"), "upgrade_pip: false\n").unwrap();

        let config = load_config(temp.path(), Some(Path::new("boot.yml"))).unwrap();
        assert!(!config.upgrade_pip);
    }

    #[test]
    fn explicit_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(Path::new("nope.yml"))).unwrap_err();
        assert!(matches!(err, BootError::Io(_)));
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = parse_config("  \n", Path::new("x.yml")).unwrap();
        assert_eq!(config, BootConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_config("packages: [unclosed", Path::new("/p/.envboot.yml")).unwrap_err();
        assert!(matches!(err, BootError::ConfigParseError { .. }));
        assert!(err.to_string().contains("/p/.envboot.yml"));
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = [(ENV_PYTHON, "/opt/py/bin/python3.12"), (ENV_ENV_DIR, "env")]
            .into_iter()
            .collect();
        let mut config = BootConfig::default();

        apply_env_overrides(&mut config, |k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.python, "/opt/py/bin/python3.12");
        assert_eq!(config.env_dir, PathBuf::from("env"));
    }

    #[test]
    fn blank_env_overrides_are_ignored() {
        let mut config = BootConfig::default();
        apply_env_overrides(&mut config, |_| Some("  ".to_string()));
        assert_eq!(config, BootConfig::default());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut config = BootConfig::default();
        config.packages.push(PackageSpec::parse("Torch>=2.0").unwrap());

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn empty_package_list_is_rejected() {
        let config = BootConfig {
            packages: vec![],
            ..Default::default()
        };
        assert!(matches!(
            validate(&config),
            Err(BootError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&BootConfig::default()).is_ok());
    }
}
