//! Virtual environment detection, layout, and bootstrapping.

pub mod bootstrap;
pub mod layout;
pub mod marker;

pub use bootstrap::{ensure_ready, plan, BootstrapAction, BootstrapOutcome};
pub use marker::{EnvironmentMarker, VIRTUAL_ENV};
