//! Applying change-feed entries to a settings record and computing the
//! entries that turn one record into another.

use serde_json::Value;
use superdrag_common::ConfigChange;
use tracing::warn;

use super::{SettingKey, SuperdragConfig, DEFAULT_LOCALE};

impl SuperdragConfig {
    /// Current value of `key` as it appears in the change feed.
    pub fn value_of(&self, key: SettingKey) -> Value {
        match key {
            SettingKey::FarDragEnabled => Value::Bool(self.far_drag_enabled),
            SettingKey::EnableGuides => Value::Bool(self.enable_guides),
            SettingKey::Locale => Value::String(self.locale.clone()),
            binding => Value::String(self.binding(binding).unwrap_or_default().to_owned()),
        }
    }

    /// Apply one change-feed entry.
    ///
    /// Returns `false` when the key is not recognised; the record is left
    /// untouched. A `null` value (key removed from storage) or a value of the
    /// wrong type restores that key's default.
    pub fn apply_change(&mut self, change: &ConfigChange) -> bool {
        let Some(key) = SettingKey::parse(&change.key) else {
            return false;
        };
        self.set_value(key, &change.new_value);
        true
    }

    pub fn set_value(&mut self, key: SettingKey, value: &Value) {
        let defaults = SuperdragConfig::default();
        match key {
            SettingKey::FarDragEnabled => {
                self.far_drag_enabled = bool_or_default(key, value, defaults.far_drag_enabled);
            }
            SettingKey::EnableGuides => {
                self.enable_guides = bool_or_default(key, value, defaults.enable_guides);
            }
            SettingKey::Locale => {
                self.locale = string_or_default(key, value, DEFAULT_LOCALE);
            }
            binding => {
                let fallback = binding.default_binding().unwrap_or_default();
                let next = string_or_default(binding, value, fallback);
                if let Some(slot) = self.binding_mut(binding) {
                    *slot = next;
                }
            }
        }
    }

    /// Changes that turn `self` into `other`, in [`SettingKey::ALL`] order.
    pub fn diff(&self, other: &SuperdragConfig) -> Vec<ConfigChange> {
        SettingKey::ALL
            .iter()
            .filter_map(|key| {
                let new_value = other.value_of(*key);
                (self.value_of(*key) != new_value).then(|| ConfigChange {
                    key: key.as_str().to_owned(),
                    new_value,
                })
            })
            .collect()
    }
}

fn bool_or_default(key: SettingKey, value: &Value, default: bool) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => default,
        other => {
            warn!(key = %key, value = %other, "expected a boolean, using default");
            default
        }
    }
}

fn string_or_default(key: SettingKey, value: &Value, default: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => default.to_owned(),
        other => {
            warn!(key = %key, value = %other, "expected a string, using default");
            default.to_owned()
        }
    }
}
