//! Tests for the settings file watcher.

use super::*;
use notify::event::{CreateKind, ModifyKind, RemoveKind};
use notify::{Event, EventKind};
use std::path::PathBuf;

fn watcher() -> ConfigWatcher {
    ConfigWatcher::new(PathBuf::from("/tmp/superdrag_watch/config.toml")).unwrap()
}

#[test]
fn new_with_nonexistent_path_succeeds() {
    assert!(ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_superdrag.toml")).is_ok());
}

#[test]
fn new_rejects_path_without_file_name() {
    assert!(ConfigWatcher::new(PathBuf::from("/")).is_err());
}

#[test]
fn modify_of_settings_file_is_relevant() {
    let event = Event::new(EventKind::Modify(ModifyKind::Any))
        .add_path(PathBuf::from("/tmp/superdrag_watch/config.toml"));
    assert!(watcher().is_relevant(&event));

    let created = Event::new(EventKind::Create(CreateKind::File))
        .add_path(PathBuf::from("/tmp/superdrag_watch/config.toml"));
    assert!(watcher().is_relevant(&created));
}

#[test]
fn other_files_and_kinds_are_ignored() {
    let other = Event::new(EventKind::Modify(ModifyKind::Any))
        .add_path(PathBuf::from("/tmp/superdrag_watch/config.toml.tmp"));
    assert!(!watcher().is_relevant(&other));

    let removed = Event::new(EventKind::Remove(RemoveKind::File))
        .add_path(PathBuf::from("/tmp/superdrag_watch/config.toml"));
    assert!(!watcher().is_relevant(&removed));
}
