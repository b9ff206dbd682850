//! Command-line interface for envboot.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, ConfigArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, EXIT_CONFIG_ERROR};
