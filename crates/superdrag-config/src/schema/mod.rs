//! Configuration schema for superdrag.
//!
//! The record is flat and uses the same camelCase key names on disk and in
//! the change feed. Every field has a default so partial files load.

mod changes;
mod keys;

pub use keys::SettingKey;

use serde::{Deserialize, Serialize};
use superdrag_common::ActionId;

pub const DEFAULT_UP: &str = "google";
pub const DEFAULT_DOWN: &str = "twitter";
pub const DEFAULT_LEFT: &str = "amazon";
pub const DEFAULT_RIGHT: &str = "copy";
pub const DEFAULT_FAR: &str = "none";
pub const DEFAULT_LOCALE: &str = "en";

/// The persisted settings record.
///
/// Bindings are kept as the raw identifiers found in storage. An empty or
/// unrecognised identifier is still stored as-is; resolution falls back to
/// the compiled-in default for that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuperdragConfig {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub up_far: String,
    pub down_far: String,
    pub left_far: String,
    pub right_far: String,
    pub far_drag_enabled: bool,
    pub enable_guides: bool,
    /// UI locale handed to the dispatcher for region-specific URLs.
    pub locale: String,
}

impl Default for SuperdragConfig {
    fn default() -> Self {
        Self {
            up: DEFAULT_UP.into(),
            down: DEFAULT_DOWN.into(),
            left: DEFAULT_LEFT.into(),
            right: DEFAULT_RIGHT.into(),
            up_far: DEFAULT_FAR.into(),
            down_far: DEFAULT_FAR.into(),
            left_far: DEFAULT_FAR.into(),
            right_far: DEFAULT_FAR.into(),
            far_drag_enabled: false,
            enable_guides: true,
            locale: DEFAULT_LOCALE.into(),
        }
    }
}

impl SuperdragConfig {
    /// Raw identifier stored for a binding key, `None` for non-binding keys.
    pub fn binding(&self, key: SettingKey) -> Option<&str> {
        let value = match key {
            SettingKey::Up => &self.up,
            SettingKey::Down => &self.down,
            SettingKey::Left => &self.left,
            SettingKey::Right => &self.right,
            SettingKey::UpFar => &self.up_far,
            SettingKey::DownFar => &self.down_far,
            SettingKey::LeftFar => &self.left_far,
            SettingKey::RightFar => &self.right_far,
            SettingKey::FarDragEnabled | SettingKey::EnableGuides | SettingKey::Locale => {
                return None
            }
        };
        Some(value.as_str())
    }

    fn binding_mut(&mut self, key: SettingKey) -> Option<&mut String> {
        match key {
            SettingKey::Up => Some(&mut self.up),
            SettingKey::Down => Some(&mut self.down),
            SettingKey::Left => Some(&mut self.left),
            SettingKey::Right => Some(&mut self.right),
            SettingKey::UpFar => Some(&mut self.up_far),
            SettingKey::DownFar => Some(&mut self.down_far),
            SettingKey::LeftFar => Some(&mut self.left_far),
            SettingKey::RightFar => Some(&mut self.right_far),
            SettingKey::FarDragEnabled | SettingKey::EnableGuides | SettingKey::Locale => None,
        }
    }

    /// Parsed action for a binding key, if the stored identifier is valid.
    pub fn action(&self, key: SettingKey) -> Option<ActionId> {
        self.binding(key).and_then(ActionId::parse)
    }
}
