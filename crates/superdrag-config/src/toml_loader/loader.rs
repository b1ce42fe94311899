//! Read the settings record from a TOML file.

use crate::schema::SuperdragConfig;
use crate::validation;
use std::path::Path;
use superdrag_common::ConfigError;
use tracing::{debug, info, warn};

use super::paths::create_default_config;

/// Load settings from a specific TOML file path.
///
/// Missing keys take their defaults. Validation problems are logged and the
/// parsed record is returned as-is; bad bindings fall back per key when
/// resolved.
pub fn load_from_path(path: &Path) -> Result<SuperdragConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: SuperdragConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("settings validation warning: {e}");
    }

    debug!("loaded settings from {}", path.display());
    Ok(config)
}

/// Load settings from `path`, writing the default template first if the file
/// does not exist yet.
pub fn load_or_create(path: &Path) -> Result<SuperdragConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no settings found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(SuperdragConfig::default())
        }
        Err(e) => Err(e),
    }
}
