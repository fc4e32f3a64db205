pub mod config;
pub mod replay;
pub mod resolution;

use std::path::Path;

use anyhow::{Context, Result};
use crag_core::session::config::SessionConfig;

/// Load a session config from TOML, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: SessionConfig = toml::from_str(&contents).context("Invalid session config")?;
    config.validate()?;
    Ok(config)
}
