//! Built-in catalog backed by the static tables

use super::tables::{HIRAGANA_LEVELS, HIRAGANA_ROMAJI, HIRAGANA_TO_KATAKANA};
use super::{CharacterSet, Kana, KanaCatalog, Level, similar_characters};
use crate::consts::MAX_LEVEL;

/// Catalog over the built-in hiragana levels and their katakana projection
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    /// Hiragana per level (index 0 = level 1)
    hiragana: Vec<Vec<Kana>>,
    /// Katakana per level, same order and romaji as `hiragana`
    katakana: Vec<Vec<Kana>>,
    /// Also offer look-alikes from the other script
    allow_opposite_set: bool,
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let hiragana: Vec<Vec<Kana>> = HIRAGANA_LEVELS
            .iter()
            .map(|level| {
                level
                    .iter()
                    .map(|&h| Kana::new(h, romaji_for(h).unwrap_or_default()))
                    .collect()
            })
            .collect();

        let katakana = hiragana
            .iter()
            .map(|level| {
                level
                    .iter()
                    .map(|k| Kana::new(to_katakana(&k.character), k.romaji.clone()))
                    .collect()
            })
            .collect();

        Self {
            hiragana,
            katakana,
            allow_opposite_set: false,
        }
    }

    /// Include cross-script look-alikes (e.g. き / キ) in similarity lookups
    pub fn with_opposite_set(mut self, allow: bool) -> Self {
        self.allow_opposite_set = allow;
        self
    }

    /// Number of levels in the catalog
    pub fn level_count(&self) -> Level {
        self.hiragana.len() as Level
    }

    fn up_to(levels: &[Vec<Kana>], level: Level) -> impl Iterator<Item = &Kana> {
        let count = level.clamp(1, MAX_LEVEL) as usize;
        levels.iter().take(count).flatten()
    }
}

impl KanaCatalog for BuiltinCatalog {
    fn kana_sets(&self, level: Level, writing_system: CharacterSet) -> Vec<Kana> {
        match writing_system {
            CharacterSet::Hiragana => Self::up_to(&self.hiragana, level).cloned().collect(),
            CharacterSet::Katakana => Self::up_to(&self.katakana, level).cloned().collect(),
            CharacterSet::Both => Self::up_to(&self.hiragana, level)
                .chain(Self::up_to(&self.katakana, level))
                .cloned()
                .collect(),
        }
    }

    fn similar_characters(&self, character: &str) -> Vec<String> {
        similar_characters(character, self.allow_opposite_set)
    }
}

fn romaji_for(hiragana: &str) -> Option<&'static str> {
    HIRAGANA_ROMAJI
        .iter()
        .find(|(h, _)| *h == hiragana)
        .map(|(_, r)| *r)
}

/// Map each hiragana char to katakana (compounds map char by char)
fn to_katakana(hiragana: &str) -> String {
    let mut buf = [0u8; 4];
    hiragana
        .chars()
        .map(|c| {
            let c = &*c.encode_utf8(&mut buf);
            HIRAGANA_TO_KATAKANA
                .iter()
                .find(|(h, _)| *h == c)
                .map(|(_, k)| k.to_string())
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_hiragana() {
        let catalog = BuiltinCatalog::new();
        let kana = catalog.kana_sets(1, CharacterSet::Hiragana);
        let romaji: Vec<&str> = kana.iter().map(|k| k.romaji.as_str()).collect();
        assert_eq!(romaji, vec!["a", "i", "u", "e", "o", "n"]);
        assert_eq!(kana[0].character, "あ");
    }

    #[test]
    fn test_levels_are_cumulative() {
        let catalog = BuiltinCatalog::new();
        let l1 = catalog.kana_sets(1, CharacterSet::Hiragana);
        let l2 = catalog.kana_sets(2, CharacterSet::Hiragana);
        assert_eq!(l2.len(), l1.len() + 5);
        assert_eq!(&l2[..l1.len()], &l1[..]);
    }

    #[test]
    fn test_katakana_projection_keeps_romaji() {
        let catalog = BuiltinCatalog::new();
        let hira = catalog.kana_sets(22, CharacterSet::Hiragana);
        let kata = catalog.kana_sets(22, CharacterSet::Katakana);
        assert_eq!(hira.len(), kata.len());
        for (h, k) in hira.iter().zip(&kata) {
            assert_eq!(h.romaji, k.romaji);
            assert!(crate::kana::is_katakana(&k.character), "{} not katakana", k.character);
        }
        let kyo = kata.iter().find(|k| k.romaji == "kyo").unwrap();
        assert_eq!(kyo.character, "キョ");
    }

    #[test]
    fn test_both_is_hiragana_then_katakana() {
        let catalog = BuiltinCatalog::new();
        let both = catalog.kana_sets(1, CharacterSet::Both);
        assert_eq!(both.len(), 12);
        assert_eq!(both[0].character, "あ");
        assert_eq!(both[6].character, "ア");
    }

    #[test]
    fn test_level_out_of_range_clamps() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(
            catalog.kana_sets(0, CharacterSet::Hiragana),
            catalog.kana_sets(1, CharacterSet::Hiragana)
        );
        assert_eq!(
            catalog.kana_sets(99, CharacterSet::Hiragana),
            catalog.kana_sets(MAX_LEVEL, CharacterSet::Hiragana)
        );
        assert_eq!(catalog.level_count(), MAX_LEVEL);
    }

    #[test]
    fn test_every_entry_has_romaji() {
        let catalog = BuiltinCatalog::new();
        for k in catalog.kana_sets(MAX_LEVEL, CharacterSet::Both) {
            assert!(!k.romaji.is_empty(), "missing romaji for {}", k.character);
        }
    }
}
