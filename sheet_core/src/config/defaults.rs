//! Starting values for a new sheet

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Values a fresh character sheet starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDefaults {
    #[serde(default = "default_name")]
    pub name: String,
    /// Score given to all six abilities
    #[serde(default = "default_ability_score")]
    pub ability_score: i32,
    #[serde(default = "default_current_hp")]
    pub current_hp: i32,
    #[serde(default = "default_max_hp")]
    pub max_hp: i32,
    #[serde(default)]
    pub experience: i32,
}

impl Default for SheetDefaults {
    fn default() -> Self {
        SheetDefaults {
            name: default_name(),
            ability_score: default_ability_score(),
            current_hp: default_current_hp(),
            max_hp: default_max_hp(),
            experience: 0,
        }
    }
}

impl SheetDefaults {
    /// Parse sheet defaults from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        super::parse_toml(content)
    }
}

fn default_name() -> String {
    "Character Name".to_string()
}
fn default_ability_score() -> i32 {
    10
}
fn default_current_hp() -> i32 {
    20
}
fn default_max_hp() -> i32 {
    30
}

/// Get the bundled sheet defaults
pub fn default_sheet_config() -> SheetDefaults {
    let toml = include_str!("../../config/sheet.toml");
    SheetDefaults::from_toml(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "bundled sheet config is invalid, using built-in defaults");
        SheetDefaults::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_matches_builtin() {
        assert_eq!(default_sheet_config(), SheetDefaults::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let defaults = SheetDefaults::from_toml("max_hp = 45\nname = \"Tordek\"\n").unwrap();
        assert_eq!(defaults.name, "Tordek");
        assert_eq!(defaults.max_hp, 45);
        assert_eq!(defaults.current_hp, 20);
        assert_eq!(defaults.ability_score, 10);
        assert_eq!(defaults.experience, 0);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result = SheetDefaults::from_toml("max_hp = \"lots\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
