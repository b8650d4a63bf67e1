//! Answer choice generation
//!
//! One correct kana plus distractors, biased toward characters that look
//! like the target so the learner has to actually read the glyph.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::consts::{DISTRACTOR_COUNT, MAX_SIMILAR_DISTRACTORS};
use crate::kana::{CharacterSet, Kana, KanaCatalog, Level};

/// Kana at `level` minus `excluded`, or the whole set if the exclusion
/// would leave nothing to draw from.
pub fn candidate_pool<C: KanaCatalog + ?Sized>(
    catalog: &C,
    level: Level,
    writing_system: CharacterSet,
    excluded: Option<&str>,
) -> Vec<Kana> {
    let full = catalog.kana_sets(level, writing_system);
    let Some(excluded) = excluded else {
        return full;
    };
    let pool: Vec<Kana> = full
        .iter()
        .filter(|k| k.character != excluded)
        .cloned()
        .collect();
    if pool.is_empty() {
        log::debug!("Excluding {} empties the pool, using full set", excluded);
        full
    } else {
        pool
    }
}

/// Draw the next target uniformly from the pool (None only for an empty catalog)
pub fn pick_target<C: KanaCatalog + ?Sized, R: Rng + ?Sized>(
    catalog: &C,
    level: Level,
    writing_system: CharacterSet,
    excluded: Option<&str>,
    rng: &mut R,
) -> Option<Kana> {
    let pool = candidate_pool(catalog, level, writing_system, excluded);
    if pool.is_empty() {
        return None;
    }
    let index = rng.random_range(0..pool.len());
    pool.into_iter().nth(index)
}

/// Build the shuffled choice set for `target`.
///
/// Up to two look-alikes come first, the rest are random pool members;
/// no two choices share a romaji. If the exclusion leaves too few
/// distinct readings to fill every slot the full level set is used.
pub fn generate_choices<C: KanaCatalog + ?Sized, R: Rng + ?Sized>(
    catalog: &C,
    target: &Kana,
    level: Level,
    writing_system: CharacterSet,
    excluded: Option<&str>,
    rng: &mut R,
) -> Vec<Kana> {
    let mut pool = candidate_pool(catalog, level, writing_system, excluded);
    if excluded.is_some() && distinct_distractor_romaji(&pool, target) < DISTRACTOR_COUNT {
        pool = catalog.kana_sets(level, writing_system);
    }

    let mut distractors: Vec<Kana> = Vec::with_capacity(DISTRACTOR_COUNT);

    for similar in catalog.similar_characters(&target.character) {
        if distractors.len() >= MAX_SIMILAR_DISTRACTORS {
            break;
        }
        let found = pool.iter().find(|k| k.character == similar);
        if let Some(kana) = found {
            if kana.romaji != target.romaji && !has_romaji(&distractors, &kana.romaji) {
                distractors.push(kana.clone());
            }
        }
    }

    let mut wrong: Vec<&Kana> = pool.iter().filter(|k| k.romaji != target.romaji).collect();
    wrong.shuffle(rng);
    for kana in wrong {
        if distractors.len() >= DISTRACTOR_COUNT {
            break;
        }
        if !has_romaji(&distractors, &kana.romaji) {
            distractors.push(kana.clone());
        }
    }

    if distractors.len() < DISTRACTOR_COUNT {
        log::warn!(
            "Only {} distractors available for {} at level {}",
            distractors.len(),
            target.romaji,
            level
        );
    }

    let mut choices = distractors;
    choices.push(target.clone());
    choices.shuffle(rng);
    choices
}

fn has_romaji(kana: &[Kana], romaji: &str) -> bool {
    kana.iter().any(|k| k.romaji == romaji)
}

fn distinct_distractor_romaji(pool: &[Kana], target: &Kana) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for kana in pool.iter().filter(|k| k.romaji != target.romaji) {
        if !seen.contains(&kana.romaji.as_str()) {
            seen.push(&kana.romaji);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CHOICE_COUNT, MAX_LEVEL};
    use crate::kana::BuiltinCatalog;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn assert_valid(choices: &[Kana], target: &Kana) {
        assert_eq!(choices.len(), CHOICE_COUNT);
        assert_eq!(choices.iter().filter(|k| k.romaji == target.romaji).count(), 1);
        assert!(choices.contains(target));
        for (i, a) in choices.iter().enumerate() {
            for b in &choices[i + 1..] {
                assert_ne!(a.romaji, b.romaji, "duplicate romaji in {:?}", choices);
            }
        }
    }

    #[test]
    fn test_level_one_every_target() {
        let catalog = BuiltinCatalog::new();
        let mut rng = Pcg32::seed_from_u64(1);
        for target in catalog.kana_sets(1, CharacterSet::Hiragana) {
            let choices =
                generate_choices(&catalog, &target, 1, CharacterSet::Hiragana, None, &mut rng);
            assert_valid(&choices, &target);
        }
    }

    #[test]
    fn test_similar_distractors_preferred() {
        let catalog = BuiltinCatalog::new();
        let target = Kana::new("ぬ", "nu");
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let choices =
                generate_choices(&catalog, &target, 7, CharacterSet::Hiragana, None, &mut rng);
            assert_valid(&choices, &target);
            // First two look-alikes of ぬ are す and め
            assert!(choices.iter().any(|k| k.character == "す"));
            assert!(choices.iter().any(|k| k.character == "め"));
        }
    }

    #[test]
    fn test_similar_outside_level_ignored() {
        let catalog = BuiltinCatalog::new();
        // い's look-alike り only arrives at level 9
        let target = Kana::new("い", "i");
        let mut rng = Pcg32::seed_from_u64(3);
        let choices = generate_choices(&catalog, &target, 1, CharacterSet::Hiragana, None, &mut rng);
        assert_valid(&choices, &target);
        assert!(choices.iter().all(|k| k.character != "り"));
    }

    #[test]
    fn test_exclusion_respected_when_possible() {
        let catalog = BuiltinCatalog::new();
        let target = Kana::new("か", "ka");
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let choices = generate_choices(
                &catalog,
                &target,
                3,
                CharacterSet::Hiragana,
                Some("あ"),
                &mut rng,
            );
            assert_valid(&choices, &target);
            assert!(choices.iter().all(|k| k.character != "あ"));
        }
    }

    #[test]
    fn test_exclusion_fallback_at_level_one() {
        let catalog = BuiltinCatalog::new();
        let mut rng = Pcg32::seed_from_u64(9);
        let target = Kana::new("あ", "a");
        let choices = generate_choices(
            &catalog,
            &target,
            1,
            CharacterSet::Hiragana,
            Some("い"),
            &mut rng,
        );
        assert_valid(&choices, &target);
        // Excluding the target itself still leaves five readings
        let choices = generate_choices(
            &catalog,
            &target,
            1,
            CharacterSet::Hiragana,
            Some("あ"),
            &mut rng,
        );
        assert_valid(&choices, &target);
    }

    #[test]
    fn test_duplicate_romaji_in_pool_never_doubles() {
        // じゃ and ぢゃ share a reading, ん appears twice in the level list
        let catalog = BuiltinCatalog::new();
        let target = Kana::new("じゃ", "ja");
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let choices =
                generate_choices(&catalog, &target, MAX_LEVEL, CharacterSet::Both, None, &mut rng);
            assert_valid(&choices, &target);
        }
    }

    #[test]
    fn test_candidate_pool_fallback_when_only_kana_excluded() {
        struct Single;
        impl KanaCatalog for Single {
            fn kana_sets(&self, _: Level, _: CharacterSet) -> Vec<Kana> {
                vec![Kana::new("あ", "a")]
            }
            fn similar_characters(&self, _: &str) -> Vec<String> {
                Vec::new()
            }
        }
        let pool = candidate_pool(&Single, 1, CharacterSet::Hiragana, Some("あ"));
        assert_eq!(pool.len(), 1);

        let mut rng = Pcg32::seed_from_u64(0);
        let target = pick_target(&Single, 1, CharacterSet::Hiragana, Some("あ"), &mut rng);
        assert_eq!(target, Some(Kana::new("あ", "a")));

        // Degenerate catalog: fewer choices, but no panic
        let choices = generate_choices(
            &Single,
            &Kana::new("あ", "a"),
            1,
            CharacterSet::Hiragana,
            Some("あ"),
            &mut rng,
        );
        assert_eq!(choices.len(), 1);
    }

    #[test]
    fn test_pick_target_skips_excluded() {
        let catalog = BuiltinCatalog::new();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let target =
                pick_target(&catalog, 1, CharacterSet::Hiragana, Some("お"), &mut rng).unwrap();
            assert_ne!(target.character, "お");
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let catalog = BuiltinCatalog::new();
        let target = Kana::new("さ", "sa");
        let a = generate_choices(
            &catalog,
            &target,
            5,
            CharacterSet::Both,
            None,
            &mut Pcg32::seed_from_u64(42),
        );
        let b = generate_choices(
            &catalog,
            &target,
            5,
            CharacterSet::Both,
            None,
            &mut Pcg32::seed_from_u64(42),
        );
        assert_eq!(a, b);
    }

    fn writing_system() -> impl Strategy<Value = CharacterSet> {
        prop_oneof![
            Just(CharacterSet::Hiragana),
            Just(CharacterSet::Katakana),
            Just(CharacterSet::Both),
        ]
    }

    proptest! {
        #[test]
        fn prop_choices_always_valid(
            level in 1u32..=MAX_LEVEL,
            ws in writing_system(),
            seed in any::<u64>(),
            exclude in any::<bool>(),
        ) {
            let catalog = BuiltinCatalog::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            let excluded = if exclude {
                pick_target(&catalog, level, ws, None, &mut rng).map(|k| k.character)
            } else {
                None
            };
            let target = pick_target(&catalog, level, ws, excluded.as_deref(), &mut rng).unwrap();
            let choices =
                generate_choices(&catalog, &target, level, ws, excluded.as_deref(), &mut rng);

            prop_assert_eq!(choices.len(), CHOICE_COUNT);
            prop_assert!(choices.contains(&target));
            let mut romaji: Vec<&str> = choices.iter().map(|k| k.romaji.as_str()).collect();
            romaji.sort();
            romaji.dedup();
            prop_assert_eq!(romaji.len(), CHOICE_COUNT);
        }
    }
}
