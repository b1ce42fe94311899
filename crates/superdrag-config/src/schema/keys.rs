use std::fmt;

use superdrag_common::ActionId;

use super::{DEFAULT_DOWN, DEFAULT_FAR, DEFAULT_LEFT, DEFAULT_RIGHT, DEFAULT_UP};

/// Every key recognised in the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Up,
    Down,
    Left,
    Right,
    UpFar,
    DownFar,
    LeftFar,
    RightFar,
    FarDragEnabled,
    EnableGuides,
    Locale,
}

impl SettingKey {
    pub const ALL: [SettingKey; 11] = [
        SettingKey::Up,
        SettingKey::Down,
        SettingKey::Left,
        SettingKey::Right,
        SettingKey::UpFar,
        SettingKey::DownFar,
        SettingKey::LeftFar,
        SettingKey::RightFar,
        SettingKey::FarDragEnabled,
        SettingKey::EnableGuides,
        SettingKey::Locale,
    ];

    /// The eight keys that hold an action binding.
    pub const BINDINGS: [SettingKey; 8] = [
        SettingKey::Up,
        SettingKey::Down,
        SettingKey::Left,
        SettingKey::Right,
        SettingKey::UpFar,
        SettingKey::DownFar,
        SettingKey::LeftFar,
        SettingKey::RightFar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Up => "up",
            SettingKey::Down => "down",
            SettingKey::Left => "left",
            SettingKey::Right => "right",
            SettingKey::UpFar => "upFar",
            SettingKey::DownFar => "downFar",
            SettingKey::LeftFar => "leftFar",
            SettingKey::RightFar => "rightFar",
            SettingKey::FarDragEnabled => "farDragEnabled",
            SettingKey::EnableGuides => "enableGuides",
            SettingKey::Locale => "locale",
        }
    }

    pub fn parse(key: &str) -> Option<SettingKey> {
        SettingKey::ALL.iter().copied().find(|k| k.as_str() == key)
    }

    pub fn is_binding(&self) -> bool {
        SettingKey::BINDINGS.contains(self)
    }

    /// Compiled-in identifier for a binding key.
    pub fn default_binding(&self) -> Option<&'static str> {
        match self {
            SettingKey::Up => Some(DEFAULT_UP),
            SettingKey::Down => Some(DEFAULT_DOWN),
            SettingKey::Left => Some(DEFAULT_LEFT),
            SettingKey::Right => Some(DEFAULT_RIGHT),
            SettingKey::UpFar | SettingKey::DownFar | SettingKey::LeftFar | SettingKey::RightFar => {
                Some(DEFAULT_FAR)
            }
            SettingKey::FarDragEnabled | SettingKey::EnableGuides | SettingKey::Locale => None,
        }
    }

    /// Compiled-in action for a binding key. Non-binding keys resolve to
    /// [`ActionId::None`].
    pub fn default_action(&self) -> ActionId {
        self.default_binding()
            .and_then(ActionId::parse)
            .unwrap_or(ActionId::None)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
