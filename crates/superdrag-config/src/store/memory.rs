use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use superdrag_common::{ConfigError, EventBus};
use tokio::sync::RwLock;

use super::SettingsStore;
use crate::schema::SuperdragConfig;

/// In-process store, used by tests and embedders without a settings file.
pub struct MemoryStore {
    config: RwLock<SuperdragConfig>,
    bus: EventBus,
    available: AtomicBool,
}

impl MemoryStore {
    pub fn new(config: SuperdragConfig, bus: EventBus) -> Self {
        Self {
            config: RwLock::new(config),
            bus,
            available: AtomicBool::new(true),
        }
    }

    /// Simulate storage going away (quota, revoked permission).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), ConfigError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ConfigError::StorageUnavailable("memory store disabled".into()))
        }
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self) -> Result<SuperdragConfig, ConfigError> {
        self.check_available()?;
        Ok(self.config.read().await.clone())
    }

    async fn set(&self, config: &SuperdragConfig) -> Result<(), ConfigError> {
        self.check_available()?;
        let changes = {
            let mut current = self.config.write().await;
            let changes = current.diff(config);
            *current = config.clone();
            changes
        };
        for change in changes {
            self.bus.publish(change);
        }
        Ok(())
    }
}
