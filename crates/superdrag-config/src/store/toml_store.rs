use async_trait::async_trait;
use std::path::{Path, PathBuf};
use superdrag_common::{ConfigError, EventBus};
use tracing::warn;

use super::SettingsStore;
use crate::schema::SuperdragConfig;
use crate::toml_loader::{load_from_path, load_or_create};
use crate::toml_writer::save_config_to_path;

/// Store backed by a TOML file on disk.
pub struct TomlStore {
    path: PathBuf,
    bus: EventBus,
}

impl TomlStore {
    pub fn new(path: PathBuf, bus: EventBus) -> Self {
        Self { path, bus }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for TomlStore {
    async fn get(&self) -> Result<SuperdragConfig, ConfigError> {
        load_or_create(&self.path)
    }

    async fn set(&self, config: &SuperdragConfig) -> Result<(), ConfigError> {
        let previous = match load_from_path(&self.path) {
            Ok(previous) => previous,
            Err(ConfigError::FileNotFound(_)) => SuperdragConfig::default(),
            Err(e) => {
                warn!("previous settings unreadable ({e}), diffing against defaults");
                SuperdragConfig::default()
            }
        };
        save_config_to_path(config, &self.path)?;
        for change in previous.diff(config) {
            self.bus.publish(change);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = TomlStore::new(path.clone(), EventBus::default());

        let config = store.get().await.unwrap();
        assert_eq!(config, SuperdragConfig::default());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn set_persists_and_publishes() {
        let dir = tempfile::tempdir().unwrap();
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let store = TomlStore::new(dir.path().join("config.toml"), bus);

        let mut next = SuperdragConfig::default();
        next.enable_guides = false;
        store.set(&next).await.unwrap();

        let change = rx.recv().await.unwrap();
        assert_eq!(change.key, "enableGuides");
        assert_eq!(change.new_value, serde_json::json!(false));
        assert!(!store.get().await.unwrap().enable_guides);
    }

    #[tokio::test]
    async fn reset_to_defaults_publishes_every_difference() {
        let dir = tempfile::tempdir().unwrap();
        let bus = EventBus::new(16);
        let store = TomlStore::new(dir.path().join("config.toml"), bus.clone());

        let mut custom = SuperdragConfig::default();
        custom.up = "youtube".into();
        custom.far_drag_enabled = true;
        store.set(&custom).await.unwrap();

        let mut rx = bus.subscribe();
        store.set(&SuperdragConfig::default()).await.unwrap();
        let mut keys = vec![rx.recv().await.unwrap().key, rx.recv().await.unwrap().key];
        keys.sort();
        assert_eq!(keys, vec!["farDragEnabled", "up"]);
    }
}
