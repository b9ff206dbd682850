//! envboot - Python environment bootstrap.
//!
//! envboot creates a virtual environment when none is active, installs a
//! fixed, ordered list of packages into the active one, prints their
//! installed versions as JSON, and checks a package against a minimum
//! `major.minor` version.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`environment`] - Active-environment detection and bootstrapping
//! - [`error`] - Error types and result aliases
//! - [`install`] - Package installation and the version report
//! - [`shell`] - External program execution
//! - [`toolchain`] - The seam to Python, pip, and package metadata
//! - [`ui`] - Terminal output
//! - [`version`] - Version parsing and minimum-version checks
//!
//! # Example
//!
//! ```
//! use envboot::toolchain::FakeToolchain;
//! use envboot::version::{check_minimum_version, MinimumVersion};
//!
//! let toolchain = FakeToolchain::new().with_version("torch", "2.2.0+cu118");
//! let check = check_minimum_version("torch", MinimumVersion::new(2, 2), &toolchain).unwrap();
//! assert_eq!(check.parsed, (2, 2));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod install;
pub mod shell;
pub mod toolchain;
pub mod ui;
pub mod version;

pub use error::{BootError, Result};
