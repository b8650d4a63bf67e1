//! Kana catalog
//!
//! Static, deterministic character data the game draws rounds from:
//! which kana are in play at a level, their romaji, and which characters
//! are easy to mistake for each other.

mod catalog;
pub mod tables;

pub use catalog::BuiltinCatalog;

use serde::{Deserialize, Serialize};

/// Difficulty level (1-based). Level N plays everything introduced at 1..=N.
pub type Level = u32;

/// A learnable character paired with its romanized reading
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kana {
    pub character: String,
    pub romaji: String,
}

impl Kana {
    pub fn new(character: impl Into<String>, romaji: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            romaji: romaji.into(),
        }
    }
}

/// Which glyph set(s) are in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CharacterSet {
    #[default]
    Hiragana,
    Katakana,
    Both,
}

impl CharacterSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterSet::Hiragana => "hiragana",
            CharacterSet::Katakana => "katakana",
            CharacterSet::Both => "both",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hiragana" => Some(CharacterSet::Hiragana),
            "katakana" => Some(CharacterSet::Katakana),
            "both" => Some(CharacterSet::Both),
            _ => None,
        }
    }
}

/// Source of kana for rounds and distractors.
///
/// Implementations must be pure: the same arguments always produce the
/// same output, in the same order.
pub trait KanaCatalog {
    /// Every kana available at `level` (levels 1..=level) in `writing_system`
    fn kana_sets(&self, level: Level, writing_system: CharacterSet) -> Vec<Kana>;

    /// Characters that look like `character`, excluding itself
    fn similar_characters(&self, character: &str) -> Vec<String>;
}

/// True if the first character is hiragana (compounds are judged by their base)
pub fn is_hiragana(s: &str) -> bool {
    s.chars().next().is_some_and(|c| ('ぁ'..='ゖ').contains(&c))
}

/// True if the first character is katakana (compounds are judged by their base)
pub fn is_katakana(s: &str) -> bool {
    s.chars().next().is_some_and(|c| ('ァ'..='ヶ').contains(&c))
}

/// Look up visually similar characters in the built-in groups.
///
/// Only groups from `character`'s own script are searched unless
/// `allow_opposite_set` is set, in which case every group is. Matches are
/// merged in group order with duplicates and `character` itself removed.
/// Compound kana (e.g. きゃ) are matched on their base and keep their suffix.
pub fn similar_characters(character: &str, allow_opposite_set: bool) -> Vec<String> {
    let mut chars = character.chars();
    let Some(base) = chars.next() else {
        return Vec::new();
    };
    let suffix = chars.as_str();
    if !suffix.is_empty() {
        let mut buf = [0u8; 4];
        return similar_characters(base.encode_utf8(&mut buf), allow_opposite_set)
            .into_iter()
            .map(|c| c + suffix)
            .collect();
    }

    let groups: Vec<&[&str]> = if allow_opposite_set {
        tables::SIMILAR_HIRAGANA
            .iter()
            .chain(tables::SIMILAR_KATAKANA)
            .chain(tables::SIMILAR_ACROSS_SCRIPTS)
            .copied()
            .collect()
    } else if is_hiragana(character) {
        tables::SIMILAR_HIRAGANA.to_vec()
    } else if is_katakana(character) {
        tables::SIMILAR_KATAKANA.to_vec()
    } else {
        Vec::new()
    };

    let mut similar: Vec<String> = Vec::new();
    for group in groups.iter().filter(|g| g.contains(&character)) {
        for &c in group.iter() {
            if c != character && !similar.iter().any(|s| s == c) {
                similar.push(c.to_string());
            }
        }
    }
    similar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_hiragana_merges_groups() {
        assert_eq!(similar_characters("の", false), vec!["ぬ"]);
        // ぬ sits in four groups
        assert_eq!(similar_characters("ぬ", false), vec!["す", "め", "の"]);
    }

    #[test]
    fn test_similar_katakana() {
        assert_eq!(similar_characters("ソ", false), vec!["シ", "ツ", "ン", "ノ"]);
        assert_eq!(similar_characters("ン", false), vec!["シ", "ツ", "ソ", "ノ"]);
    }

    #[test]
    fn test_similar_compound() {
        assert_eq!(similar_characters("きゃ", false), vec!["さゃ"]);
        assert!(similar_characters("キャ", false).is_empty());
    }

    #[test]
    fn test_similar_respects_script_boundary() {
        assert_eq!(similar_characters("き", false), vec!["さ"]);
        assert!(similar_characters("キ", false).is_empty());
    }

    #[test]
    fn test_similar_across_scripts() {
        assert_eq!(similar_characters("き", true), vec!["さ", "キ"]);
        assert_eq!(similar_characters("キ", true), vec!["き"]);
    }

    #[test]
    fn test_similar_unknown_and_empty() {
        assert!(similar_characters("", false).is_empty());
        assert!(similar_characters("x", false).is_empty());
        assert!(similar_characters("あ", false) == vec!["お"]);
    }

    #[test]
    fn test_script_detection() {
        assert!(is_hiragana("あ"));
        assert!(!is_hiragana("ア"));
        assert!(is_hiragana("きゃ"));
        assert!(is_katakana("ア"));
        assert!(!is_katakana("あ"));
        assert!(is_katakana("キャ"));
        assert!(!is_katakana(""));
    }

    #[test]
    fn test_character_set_parse() {
        assert_eq!(CharacterSet::from_str("Katakana"), Some(CharacterSet::Katakana));
        assert_eq!(CharacterSet::from_str("both"), Some(CharacterSet::Both));
        assert_eq!(CharacterSet::from_str("kanji"), None);
        for set in [CharacterSet::Hiragana, CharacterSet::Katakana, CharacterSet::Both] {
            assert_eq!(CharacterSet::from_str(set.as_str()), Some(set));
        }
    }
}
