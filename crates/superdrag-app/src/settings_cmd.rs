//! `superdrag settings ...`

use serde_json::Value;
use superdrag_common::{ActionId, ConfigError, SuperdragError};
use superdrag_config::{SettingKey, SettingsStore, SuperdragConfig, TomlStore};

use crate::cli::SettingsCommand;

/// Turn a command-line value into the change-feed value for `key`.
pub fn parse_value(key: SettingKey, raw: &str) -> Result<Value, ConfigError> {
    match key {
        SettingKey::FarDragEnabled | SettingKey::EnableGuides => raw
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| ConfigError::ValidationError(format!("{key} expects true or false"))),
        SettingKey::Locale if raw.is_empty() => Err(ConfigError::ValidationError(
            "locale must not be empty".into(),
        )),
        SettingKey::Locale => Ok(Value::String(raw.to_owned())),
        binding => match ActionId::parse(raw) {
            Some(action) => Ok(Value::String(action.as_str().to_owned())),
            None => Err(ConfigError::ValidationError(format!(
                "{binding} = {raw:?} is not a known action"
            ))),
        },
    }
}

pub fn parse_key(key: &str) -> Result<SettingKey, ConfigError> {
    SettingKey::parse(key)
        .ok_or_else(|| ConfigError::ValidationError(format!("unknown setting {key:?}")))
}

/// Return `config` with `key` set from the command line.
pub fn with_setting(
    config: &SuperdragConfig,
    key: SettingKey,
    raw: &str,
) -> Result<SuperdragConfig, ConfigError> {
    let value = parse_value(key, raw)?;
    let mut next = config.clone();
    next.set_value(key, &value);
    Ok(next)
}

pub async fn run(command: SettingsCommand, store: &TomlStore) -> Result<(), SuperdragError> {
    match command {
        SettingsCommand::Show => {
            let config = store.get().await?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            print!("{rendered}");
        }
        SettingsCommand::Set { key, value } => {
            let key = parse_key(&key)?;
            let config = store.get().await?;
            let next = with_setting(&config, key, &value)?;
            store.set(&next).await?;
            println!("{key} = {}", next.value_of(key));
        }
        SettingsCommand::Reset => {
            store.set(&SuperdragConfig::default()).await?;
            println!("settings reset to defaults");
        }
        SettingsCommand::Path => println!("{}", store.path().display()),
    }
    Ok(())
}
