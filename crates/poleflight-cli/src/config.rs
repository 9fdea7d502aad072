//! Planner configuration from a TOML file and the environment.

use std::path::Path;

use poleflight_core::PlannerConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load the planner configuration.
///
/// Without a file the built-in inspection defaults are used. Environment
/// overrides (`POLEFLIGHT_*`) are applied last in both cases.
pub fn load_config(path: Option<&Path>) -> Result<PlannerConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        }
        None => PlannerConfig::default(),
    };
    Ok(config.with_env_overrides())
}
