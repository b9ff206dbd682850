//! Package installation and version reporting.

pub mod report;
pub mod spec;

pub use report::VersionReport;
pub use spec::{PackageSpec, DEFAULT_PACKAGES};

use crate::config::BootConfig;
use crate::error::Result;
use crate::toolchain::Toolchain;

/// Look up the installed version of every package, in order.
///
/// The first package without metadata aborts the lookup.
pub fn collect_report(packages: &[PackageSpec], toolchain: &dyn Toolchain) -> Result<VersionReport> {
    let mut report = VersionReport::new();
    for spec in packages {
        let version = toolchain.installed_version(spec.name())?;
        tracing::debug!("{} resolved to {}", spec.name(), version);
        report.push(spec.name(), version);
    }
    Ok(report)
}

/// Install the configured packages in one call, then report their versions.
pub fn install_and_report(config: &BootConfig, toolchain: &dyn Toolchain) -> Result<VersionReport> {
    tracing::info!(
        "Installing {} package(s): {}",
        config.packages.len(),
        config
            .packages
            .iter()
            .map(PackageSpec::requirement)
            .collect::<Vec<_>>()
            .join(", ")
    );
    toolchain.install(&config.packages, config.upgrade_pip)?;
    collect_report(&config.packages, toolchain)
}
