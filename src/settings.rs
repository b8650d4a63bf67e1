//! Game settings and preferences
//!
//! Persisted through a `KeyValueStore`. The level is stored on its own as
//! a plain integer string; writing system and speed go in a JSON blob.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LEVEL, MAX_LEVEL};
use crate::kana::{CharacterSet, Level};
use crate::persistence::{KeyValueStore, LEVEL_KEY, SETTINGS_KEY, StorageError};
use crate::sim::SpeedSetting;

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Highest level in play (1-based)
    #[serde(skip)]
    pub level: Level,
    #[serde(default)]
    pub writing_system: CharacterSet,
    #[serde(default)]
    pub speed_setting: SpeedSetting,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            writing_system: CharacterSet::Hiragana,
            speed_setting: SpeedSetting::Normal,
        }
    }
}

impl Settings {
    /// Parse a stored level; anything but an integer in 1..=MAX_LEVEL is rejected
    pub fn parse_level(raw: &str) -> Option<Level> {
        raw.trim()
            .parse::<Level>()
            .ok()
            .filter(|level| (1..=MAX_LEVEL).contains(level))
    }

    /// Load settings, falling back to defaults for anything missing or corrupt
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let mut settings = match store.get(SETTINGS_KEY) {
            Some(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("Ignoring corrupt settings: {}", err);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        settings.level = match store.get(LEVEL_KEY) {
            Some(raw) => Self::parse_level(&raw).unwrap_or_else(|| {
                log::warn!("Stored level {:?} is invalid, using {}", raw, DEFAULT_LEVEL);
                DEFAULT_LEVEL
            }),
            None => DEFAULT_LEVEL,
        };

        log::info!(
            "Loaded settings: level {}, {}, {}",
            settings.level,
            settings.writing_system.as_str(),
            settings.speed_setting.as_str()
        );
        settings
    }

    /// Save the level alone (the common case: level picker changed)
    pub fn save_level<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<(), StorageError> {
        store.set(LEVEL_KEY, &self.level.to_string())
    }

    /// Save everything
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        self.save_level(store)?;
        let json = serde_json::to_string(self).map_err(|source| StorageError::Serialize {
            key: SETTINGS_KEY.to_string(),
            source,
        })?;
        store.set(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
