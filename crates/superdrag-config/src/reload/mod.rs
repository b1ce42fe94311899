//! Live settings reload.
//!
//! Combines the file watcher with the loader: each debounced edit is
//! reloaded, diffed against the last good record, and the differences are
//! published on the event bus as ordinary change-feed entries.

mod manager;


pub use manager::ReloadManager;
