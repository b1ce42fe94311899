//! In-memory mirror of the persisted settings.
//!
//! Each change replaces the whole record. A snapshot handed out before a
//! change keeps describing the record as it was, so a gesture that captured
//! its snapshot at drop time finishes with consistent values.

use std::sync::Arc;

use superdrag_common::ConfigChange;
use tracing::{debug, warn};

use crate::schema::SuperdragConfig;
use crate::store::SettingsStore;

#[derive(Debug, Clone)]
pub struct ConfigCache {
    current: Arc<SuperdragConfig>,
}

impl ConfigCache {
    pub fn new(config: SuperdragConfig) -> Self {
        Self {
            current: Arc::new(config),
        }
    }

    /// Read the store once. Storage failures fall back to defaults.
    pub async fn load(store: &dyn SettingsStore) -> Self {
        match store.get().await {
            Ok(config) => Self::new(config),
            Err(e) => {
                warn!("settings unavailable, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn snapshot(&self) -> Arc<SuperdragConfig> {
        Arc::clone(&self.current)
    }

    /// Apply one change-feed entry. Returns `true` if the key was recognised.
    pub fn apply(&mut self, change: &ConfigChange) -> bool {
        let mut next = SuperdragConfig::clone(&self.current);
        if !next.apply_change(change) {
            debug!(key = %change.key, "ignoring unrecognised settings key");
            return false;
        }
        self.current = Arc::new(next);
        true
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(SuperdragConfig::default())
    }
}
