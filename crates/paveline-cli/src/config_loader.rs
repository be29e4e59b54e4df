//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use paveline_core::config::{CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "paveline.toml";

/// Load layered configuration: defaults, then file, then environment
///
/// An explicit `path` must exist. Without one, `./paveline.toml` is used
/// only when present.
pub fn load_config(path: Option<&Path>) -> Result<LayeredConfig> {
    let config = LayeredConfig::with_defaults();

    let config = match config_file(path) {
        Some(file) => {
            tracing::debug!(path = %file.display(), "Loading configuration file");
            config
                .load_from_file(&file)
                .with_context(|| format!("Failed to load configuration file {}", file.display()))?
        }
        None => config,
    };

    Ok(config.load_from_env())
}

/// Load layered configuration with CLI overrides
pub fn load_config_with_overrides(
    path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = load_config(path)?;
    config.update_from_cli(overrides);
    Ok(config)
}

fn config_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}
