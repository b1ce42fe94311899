//! Settings storage capability.
//!
//! The gesture core never reads storage directly: it is handed a snapshot
//! and a change feed. Stores are the collaborators that produce both.

mod memory;
mod toml_store;

pub use memory::MemoryStore;
pub use toml_store::TomlStore;

use async_trait::async_trait;
use superdrag_common::ConfigError;

use crate::schema::SuperdragConfig;

/// Asynchronous get/set over the persisted settings record.
///
/// A successful `set` publishes one `ConfigChange` per modified key on the
/// store's event bus.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self) -> Result<SuperdragConfig, ConfigError>;

    async fn set(&self, config: &SuperdragConfig) -> Result<(), ConfigError>;
}
