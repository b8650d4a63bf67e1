//! Key/value persistence for settings and statistics
//!
//! Storage is opaque string-to-string. Reads never fail (missing or
//! unreadable values are simply absent); writes report a `StorageError`
//! that callers surface as a notice instead of interrupting play.

mod memory;

#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

use thiserror::Error;

use crate::sim::KanaStatsMap;

/// Level as a decimal integer string
pub const LEVEL_KEY: &str = "kanaGameLevel";
/// Writing system and speed as JSON
pub const SETTINGS_KEY: &str = "kanaGameSettings";
/// Per-character statistics as JSON
pub const STATS_KEY: &str = "kanaGameStats";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize {key}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Opaque string store (LocalStorage in the browser, a map elsewhere)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load statistics; missing or corrupt data starts fresh
pub fn load_stats<S: KeyValueStore + ?Sized>(store: &S) -> KanaStatsMap {
    let Some(json) = store.get(STATS_KEY) else {
        return KanaStatsMap::new();
    };
    match serde_json::from_str(&json) {
        Ok(stats) => stats,
        Err(err) => {
            log::warn!("Ignoring corrupt statistics: {}", err);
            KanaStatsMap::new()
        }
    }
}

pub fn save_stats<S: KeyValueStore + ?Sized>(
    store: &mut S,
    stats: &KanaStatsMap,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(stats).map_err(|source| StorageError::Serialize {
        key: STATS_KEY.to_string(),
        source,
    })?;
    store.set(STATS_KEY, &json)
}
