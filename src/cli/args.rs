//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Running with no subcommand
//! is the same as `envboot setup`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::version::MinimumVersion;

/// envboot - Python environment bootstrap.
#[derive(Debug, Parser)]
#[command(name = "envboot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .envboot.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create or use the environment, install packages, print versions (default)
    Setup,

    /// Check that a package meets a minimum major.minor version
    Check(CheckArgs),

    /// Print installed versions of the configured packages without installing
    Report,

    /// Show resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Package to check (defaults to the configured one)
    #[arg(long)]
    pub package: Option<String>,

    /// Minimum major.minor version, e.g. 2.2 (defaults to the configured one)
    #[arg(long, value_name = "X.Y")]
    pub minimum: Option<MinimumVersion>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}
