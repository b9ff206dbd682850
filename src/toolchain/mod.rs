//! External tooling: environment creation, package installation, and
//! installed-version lookup.
//!
//! The [`Toolchain`] trait is the only way the rest of the crate reaches
//! these tools. [`PythonToolchain`] drives a real interpreter; [`FakeToolchain`]
//! records calls in memory for tests.

pub mod fake;
pub mod python;

use std::path::Path;

use crate::error::Result;
use crate::install::PackageSpec;

pub use fake::FakeToolchain;
pub use python::PythonToolchain;

/// Operations the bootstrapper, installer and version check depend on.
pub trait Toolchain {
    /// Create a new isolated environment at `env_dir`.
    fn create_environment(&self, env_dir: &Path) -> Result<()>;

    /// Install all packages in a single package-manager call.
    fn install(&self, packages: &[PackageSpec], upgrade_pip: bool) -> Result<()>;

    /// Version string of an installed distribution.
    fn installed_version(&self, package: &str) -> Result<String>;
}
