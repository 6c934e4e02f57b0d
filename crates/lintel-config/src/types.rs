//! Configuration types for `lintel.toml`.

use lintel_core::{RunnerOptions, Thresholds};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lintel configuration loaded from `lintel.toml`.
///
/// Every section and field is optional; omitted values fall back to the
/// engine defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct LintelConfig {
    /// Analysis limits and thresholds.
    #[serde(default)]
    pub limits: Thresholds,

    /// Runner behavior.
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl LintelConfig {
    /// Validates the whole configuration at load time so misconfiguration
    /// fails fast with a clear message instead of surfacing mid-run.
    ///
    /// # Errors
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.limits.validate()?;
        self.runner.validate()
    }
}

/// Runner behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RunnerConfig {
    /// Number of files analyzed concurrently. Defaults to the number of
    /// available CPUs.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Per-file time budget in seconds.
    #[serde(default = "default_file_timeout_secs")]
    pub file_timeout_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            workers: None,
            file_timeout_secs: default_file_timeout_secs(),
        }
    }
}

fn default_file_timeout_secs() -> u64 {
    30
}

impl RunnerConfig {
    /// Validates runner values.
    ///
    /// # Errors
    /// Returns a message describing the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("runner.workers must be > 0".to_string());
            }
            if workers > 256 {
                return Err("runner.workers unreasonably large (>256)".to_string());
            }
        }

        if self.file_timeout_secs == 0 {
            return Err("runner.file_timeout_secs must be > 0".to_string());
        }
        if self.file_timeout_secs > 3600 {
            return Err("runner.file_timeout_secs unreasonably large (>3600)".to_string());
        }

        Ok(())
    }

    /// Convert into engine runner options, filling gaps from the defaults.
    pub fn to_runner_options(&self) -> RunnerOptions {
        let defaults = RunnerOptions::default();
        RunnerOptions {
            workers: self.workers.unwrap_or(defaults.workers),
            file_timeout: Duration::from_secs(self.file_timeout_secs),
        }
    }
}
