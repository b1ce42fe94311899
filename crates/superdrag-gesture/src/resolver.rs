//! Turns a classified gesture into an action using the settings record.

use superdrag_common::{ActionId, Direction, MagnitudeBand};
use superdrag_config::{SettingKey, SuperdragConfig};
use tracing::warn;

/// Drops at least this far from the origin count as far drags.
pub const FAR_THRESHOLD: f64 = 100.0;

/// The settings key holding the binding for a direction and band.
pub fn settings_key(direction: Direction, band: MagnitudeBand) -> SettingKey {
    match (direction, band) {
        (Direction::Up, MagnitudeBand::Near) => SettingKey::Up,
        (Direction::Down, MagnitudeBand::Near) => SettingKey::Down,
        (Direction::Left, MagnitudeBand::Near) => SettingKey::Left,
        (Direction::Right, MagnitudeBand::Near) => SettingKey::Right,
        (Direction::Up, MagnitudeBand::Far) => SettingKey::UpFar,
        (Direction::Down, MagnitudeBand::Far) => SettingKey::DownFar,
        (Direction::Left, MagnitudeBand::Far) => SettingKey::LeftFar,
        (Direction::Right, MagnitudeBand::Far) => SettingKey::RightFar,
    }
}

/// The action bound to `key`.
///
/// Empty or missing identifiers resolve to the compiled-in default for that
/// key. So do identifiers that name no known action, after a warning.
pub fn resolve_action(key: SettingKey, config: &SuperdragConfig) -> ActionId {
    match config.binding(key) {
        Some(id) if !id.is_empty() => ActionId::parse(id).unwrap_or_else(|| {
            warn!(key = %key, id, "unknown action id, using default");
            key.default_action()
        }),
        _ => key.default_action(),
    }
}

/// Band for a drop `distance` away from the origin.
///
/// A far drop degrades to near unless far mode is on and the far binding for
/// `direction` does something.
pub fn magnitude_band(
    config: &SuperdragConfig,
    direction: Direction,
    distance: f64,
) -> MagnitudeBand {
    if !config.far_drag_enabled || distance < FAR_THRESHOLD {
        return MagnitudeBand::Near;
    }
    let far_action = resolve_action(settings_key(direction, MagnitudeBand::Far), config);
    if far_action == ActionId::None {
        MagnitudeBand::Near
    } else {
        MagnitudeBand::Far
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use superdrag_common::{AiService, SearchEngine};

    #[test]
    fn every_direction_and_band_has_a_distinct_key() {
        let mut keys = Vec::new();
        for direction in Direction::ALL {
            for band in [MagnitudeBand::Near, MagnitudeBand::Far] {
                let key = settings_key(direction, band);
                assert!(key.is_binding());
                assert!(!keys.contains(&key));
                keys.push(key);
            }
        }
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn resolves_configured_action() {
        let mut config = SuperdragConfig::default();
        config.down = "claude".into();
        assert_eq!(
            resolve_action(SettingKey::Down, &config),
            ActionId::OpenAiChat(AiService::Claude)
        );
    }

    #[test]
    fn empty_binding_falls_back_to_default() {
        let mut config = SuperdragConfig::default();
        config.up = String::new();
        assert_eq!(
            resolve_action(SettingKey::Up, &config),
            ActionId::OpenSearch(SearchEngine::Google)
        );
    }

    #[test]
    fn unknown_binding_falls_back_to_default() {
        let mut config = SuperdragConfig::default();
        config.right = "bing".into();
        assert_eq!(resolve_action(SettingKey::Right, &config), ActionId::Copy);
    }

    #[test]
    fn far_requires_far_mode() {
        let mut config = SuperdragConfig::default();
        config.up_far = "youtube".into();
        assert_eq!(
            magnitude_band(&config, Direction::Up, 500.0),
            MagnitudeBand::Near
        );
        config.far_drag_enabled = true;
        assert_eq!(
            magnitude_band(&config, Direction::Up, 500.0),
            MagnitudeBand::Far
        );
    }

    #[test]
    fn far_requires_threshold() {
        let mut config = SuperdragConfig::default();
        config.far_drag_enabled = true;
        config.left_far = "maps".into();
        assert_eq!(
            magnitude_band(&config, Direction::Left, 99.9),
            MagnitudeBand::Near
        );
        assert_eq!(
            magnitude_band(&config, Direction::Left, FAR_THRESHOLD),
            MagnitudeBand::Far
        );
    }

    #[test]
    fn far_degrades_when_far_binding_is_none() {
        let mut config = SuperdragConfig::default();
        config.far_drag_enabled = true;
        config.up_far = "none".into();
        assert_eq!(
            magnitude_band(&config, Direction::Up, 120.0),
            MagnitudeBand::Near
        );
    }
}
