//! Write the settings record to TOML on disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place so a crash
//! mid-write never leaves a truncated file.

use std::path::Path;

use superdrag_common::ConfigError;

use crate::schema::SuperdragConfig;

/// Write settings to a specific path, creating parent directories.
pub fn save_config_to_path(config: &SuperdragConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize settings: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::StorageUnavailable(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::StorageUnavailable(format!(
            "failed to write settings to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Windows refuses to rename over an open file.
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::StorageUnavailable(format!(
                "failed to write settings to {}: {e2}",
                path.display()
            ))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "settings saved to disk");
    Ok(())
}
