//! Per-character answer statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Answer history for one character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanaStats {
    pub correct: u32,
    pub wrong: u32,
    /// Round in which the character was last answered
    #[serde(default)]
    pub last_seen_round: u32,
}

impl KanaStats {
    pub fn attempts(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Fraction answered correctly (None before the first attempt)
    pub fn accuracy(&self) -> Option<f32> {
        match self.attempts() {
            0 => None,
            n => Some(self.correct as f32 / n as f32),
        }
    }
}

/// Statistics keyed by character, ordered for stable serialization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KanaStatsMap {
    entries: BTreeMap<String, KanaStats>,
}

impl KanaStatsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one answer for `character`
    pub fn record(&mut self, character: &str, is_correct: bool, round: u32) {
        let entry = self.entries.entry(character.to_string()).or_default();
        if is_correct {
            entry.correct += 1;
        } else {
            entry.wrong += 1;
        }
        entry.last_seen_round = round;
    }

    pub fn get(&self, character: &str) -> Option<&KanaStats> {
        self.entries.get(character)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KanaStats)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Characters answered wrong at least once, worst accuracy first
    pub fn weakest(&self, limit: usize) -> Vec<&str> {
        let mut missed: Vec<(&str, &KanaStats)> =
            self.iter().filter(|(_, s)| s.wrong > 0).collect();
        missed.sort_by(|a, b| {
            let acc_a = a.1.accuracy().unwrap_or(1.0);
            let acc_b = b.1.accuracy().unwrap_or(1.0);
            acc_a
                .partial_cmp(&acc_b)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.1.wrong.cmp(&a.1.wrong))
        });
        missed.into_iter().take(limit).map(|(c, _)| c).collect()
    }
}
