//! Version parsing and minimum-version checks.
//!
//! Versions are compared on `(major, minor)` only. Patch level, pre-release
//! and local labels never affect the outcome.

pub mod check;
pub mod parse;

pub use check::{check_minimum_version, evaluate, VersionCheck};
pub use parse::{parse_major_minor, MinimumVersion};
