//! CLI commands.

pub mod config;
pub mod extract;
pub mod inspect;

use std::path::{Path, PathBuf};

use orderx_core::OrderxConfig;
use tracing::debug;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orderx")
        .join("config.json")
}

/// Load the configuration from `path`, or from the default location if it
/// exists, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<OrderxConfig> {
    if let Some(path) = path {
        debug!("Loading config from {}", path.display());
        return Ok(OrderxConfig::from_file(path)?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(OrderxConfig::from_file(&default_path)?)
    } else {
        Ok(OrderxConfig::default())
    }
}
