//! Binding identifier checks.

use superdrag_common::ActionId;

use crate::schema::{SettingKey, SuperdragConfig};

/// An identifier must name a known action. Empty identifiers are allowed
/// and mean "use the default".
pub(crate) fn validate_bindings(errors: &mut Vec<String>, config: &SuperdragConfig) {
    for key in SettingKey::BINDINGS {
        let Some(id) = config.binding(key) else {
            continue;
        };
        if !id.is_empty() && ActionId::parse(id).is_none() {
            errors.push(format!("{key} = {id:?} is not a known action"));
        }
    }
}

pub(crate) fn validate_locale(errors: &mut Vec<String>, config: &SuperdragConfig) {
    if config.locale.trim().is_empty() {
        errors.push("locale must not be empty".to_owned());
    }
}
