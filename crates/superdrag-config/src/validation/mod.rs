//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` so one warning
//! describes the whole record.

mod bindings;


use crate::schema::SuperdragConfig;
use superdrag_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SuperdragConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    bindings::validate_bindings(&mut errors, config);
    bindings::validate_locale(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
