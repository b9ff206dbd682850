//! Configuration loading and validation.
//!
//! Configuration is optional. Without a `.envboot.yml` the stock setup is
//! used: a `.venv` directory, `numpy`, `pandas`, `torch` and `transformers`,
//! and a `torch >= 2.2` version check.

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, find_project_config, load_config, load_config_file, parse_config,
    validate, CONFIG_FILE, ENV_ENV_DIR, ENV_PYTHON,
};
pub use schema::{BootConfig, MinimumRequirement, DEFAULT_ENV_DIR, DEFAULT_PYTHON};
