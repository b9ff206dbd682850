//! In-memory toolchain for tests.
//!
//! # Example
//!
//! ```
//! use envboot::toolchain::{FakeToolchain, Toolchain};
//!
//! let toolchain = FakeToolchain::new().with_version("torch", "2.3.0");
//! assert_eq!(toolchain.installed_version("torch").unwrap(), "2.3.0");
//! assert!(toolchain.installed_version("numpy").is_err());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::environment::layout;
use crate::error::{BootError, Result};
use crate::install::PackageSpec;

use super::Toolchain;

/// Toolchain double that records calls and serves canned versions.
///
/// Installing a package that has no canned version marks it installed as
/// `0.0.0`, unless it was registered with [`FakeToolchain::with_broken_metadata`].
#[derive(Debug, Default)]
pub struct FakeToolchain {
    versions: RefCell<HashMap<String, String>>,
    available: HashMap<String, String>,
    broken_metadata: Vec<String>,
    fail_create: Option<i32>,
    fail_install: Option<i32>,
    created: RefCell<Vec<PathBuf>>,
    installs: RefCell<Vec<(Vec<String>, bool)>>,
}

impl FakeToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// A package that is already installed at `version`.
    pub fn with_version(self, package: &str, version: &str) -> Self {
        self.versions
            .borrow_mut()
            .insert(package.to_string(), version.to_string());
        self
    }

    /// A package that becomes `version` once installed.
    pub fn with_available(mut self, package: &str, version: &str) -> Self {
        self.available
            .insert(package.to_string(), version.to_string());
        self
    }

    /// A package that installs but whose metadata cannot be found.
    pub fn with_broken_metadata(mut self, package: &str) -> Self {
        self.broken_metadata.push(package.to_string());
        self
    }

    /// Environment creation exits with `code`.
    pub fn failing_create(mut self, code: i32) -> Self {
        self.fail_create = Some(code);
        self
    }

    /// The install call exits with `code`.
    pub fn failing_install(mut self, code: i32) -> Self {
        self.fail_install = Some(code);
        self
    }

    /// Directories passed to `create_environment`.
    pub fn created(&self) -> Vec<PathBuf> {
        self.created.borrow().clone()
    }

    /// Requirements and upgrade flag of every install call.
    pub fn installs(&self) -> Vec<(Vec<String>, bool)> {
        self.installs.borrow().clone()
    }
}

impl Toolchain for FakeToolchain {
    /// Creates the directory and an empty activation script on disk.
    fn create_environment(&self, env_dir: &Path) -> Result<()> {
        self.created.borrow_mut().push(env_dir.to_path_buf());

        if let Some(code) = self.fail_create {
            return Err(BootError::EnvCreationFailed {
                path: env_dir.to_path_buf(),
                code: Some(code),
            });
        }

        let script = layout::activate_script(env_dir);
        if let Some(parent) = script.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(script, "")?;
        Ok(())
    }

    fn install(&self, packages: &[PackageSpec], upgrade_pip: bool) -> Result<()> {
        let requirements: Vec<String> = packages
            .iter()
            .map(|p| p.requirement().to_string())
            .collect();
        self.installs
            .borrow_mut()
            .push((requirements.clone(), upgrade_pip));

        if let Some(code) = self.fail_install {
            return Err(BootError::InstallFailed {
                command: format!("pip install {}", requirements.join(" ")),
                code: Some(code),
            });
        }

        let mut versions = self.versions.borrow_mut();
        for spec in packages {
            let version = self
                .available
                .get(spec.name())
                .cloned()
                .unwrap_or_else(|| "0.0.0".to_string());
            versions.insert(spec.name().to_string(), version);
        }
        Ok(())
    }

    fn installed_version(&self, package: &str) -> Result<String> {
        if self.broken_metadata.iter().any(|p| p == package) {
            return Err(BootError::MetadataNotFound {
                package: package.to_string(),
            });
        }

        self.versions
            .borrow()
            .get(package)
            .cloned()
            .ok_or_else(|| BootError::MetadataNotFound {
                package: package.to_string(),
            })
    }
}
