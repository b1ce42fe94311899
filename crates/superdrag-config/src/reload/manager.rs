use crate::schema::SuperdragConfig;
use crate::toml_loader;
use crate::watcher::ConfigWatcher;
use std::path::PathBuf;
use superdrag_common::{ConfigChange, EventBus};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Reloads the settings file on change and publishes what changed.
pub struct ReloadManager {
    config_path: PathBuf,
    last: SuperdragConfig,
    bus: EventBus,
}

impl ReloadManager {
    /// Load the initial record, falling back to defaults if it is unreadable.
    pub fn new(config_path: PathBuf, bus: EventBus) -> Self {
        let last = match toml_loader::load_or_create(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load settings: {e}, using defaults");
                SuperdragConfig::default()
            }
        };
        Self {
            config_path,
            last,
            bus,
        }
    }

    pub fn current(&self) -> &SuperdragConfig {
        &self.last
    }

    /// Re-read the file and publish the differences.
    ///
    /// A file that fails to parse is ignored and the previous record stays
    /// in effect.
    pub fn reload(&mut self) -> Vec<ConfigChange> {
        let next = match toml_loader::load_from_path(&self.config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("settings reload failed: {e}");
                return Vec::new();
            }
        };
        let changes = self.last.diff(&next);
        for change in &changes {
            self.bus.publish(change.clone());
        }
        if !changes.is_empty() {
            info!(count = changes.len(), "settings reloaded");
        }
        self.last = next;
        changes
    }

    /// Start watching in the background.
    ///
    /// Returns the initial record and the handle of the reload task.
    pub fn start(config_path: PathBuf, bus: EventBus) -> (SuperdragConfig, JoinHandle<()>) {
        let mut manager = ReloadManager::new(config_path, bus);
        let initial = manager.current().clone();

        let handle = tokio::spawn(async move {
            let watcher = match ConfigWatcher::new(manager.config_path.clone()) {
                Ok(w) => w,
                Err(e) => {
                    error!("failed to create settings watcher: {e}");
                    return;
                }
            };

            let (tx, mut rx) = mpsc::channel::<()>(4);
            tokio::spawn(async move {
                if let Err(e) = watcher.watch(tx).await {
                    error!("settings watcher error: {e}");
                }
            });

            while rx.recv().await.is_some() {
                manager.reload();
            }
            info!("settings watcher closed");
        });

        (initial, handle)
    }
}
