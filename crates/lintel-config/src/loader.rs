//! Loading and discovery of `lintel.toml`.

use crate::types::LintelConfig;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working root when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "lintel.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load and validate configuration from an explicit path. The file must
/// exist; a missing explicitly-given config is an error, not a fallback.
pub fn load(path: &Path) -> Result<LintelConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let config: LintelConfig = toml::from_str(&contents)?;
    config.validate().map_err(ConfigError::Invalid)?;

    Ok(config)
}

/// Load `lintel.toml` from `root`, falling back to defaults when the file
/// does not exist.
pub fn load_or_default(root: &Path) -> Result<LintelConfig, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(LintelConfig::default());
    }
    load(&path)
}
