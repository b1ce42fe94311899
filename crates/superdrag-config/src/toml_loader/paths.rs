//! Settings path resolution and default file creation.

use std::path::{Path, PathBuf};
use superdrag_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Get the platform-specific default settings file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::StorageUnavailable("could not determine config directory".into())
    })?;
    Ok(config_dir.join("superdrag").join("config.toml"))
}

/// Create the default TOML settings file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::StorageUnavailable(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::StorageUnavailable(format!(
            "failed to write default settings to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default settings at {}", path.display());
    Ok(())
}
