//! Configuration loading for lintel.
//!
//! A `lintel.toml` in the working root (or an explicitly given path)
//! overrides engine defaults. Missing files fall back to defaults; files
//! with invalid values are rejected at load time.

pub mod loader;
pub mod types;

pub use loader::{load, load_or_default, ConfigError, CONFIG_FILE_NAME};
pub use types::{LintelConfig, RunnerConfig};
