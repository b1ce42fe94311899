//! superdrag settings.
//!
//! Provides the flat settings record with per-key defaults, TOML
//! persistence, the asynchronous store capability, the in-memory cache the
//! gesture core reads from, and live reload that turns file edits into
//! change-feed entries.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use superdrag_config::{ConfigCache, SettingsStore, TomlStore};
//! use superdrag_common::EventBus;
//!
//! # async fn demo() {
//! let path = superdrag_config::toml_loader::default_config_path().unwrap();
//! let store = TomlStore::new(path, EventBus::default());
//! let cache = ConfigCache::load(&store).await;
//! println!("up = {}", cache.snapshot().up);
//! # }
//! ```

pub mod cache;
pub mod reload;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use cache::ConfigCache;
pub use reload::ReloadManager;
pub use schema::{SettingKey, SuperdragConfig};
pub use store::{MemoryStore, SettingsStore, TomlStore};
pub use toml_writer::save_config_to_path;
pub use watcher::ConfigWatcher;
