//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands receive
//! their configuration, environment marker and toolchain from
//! [`CommandDispatcher`], so tests can hand them fakes.

pub mod check;
pub mod config;
pub mod dispatcher;
pub mod report;
pub mod setup;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_CONFIG_ERROR};
