//! Kana Drop - a falling-character drill for learning Japanese kana
//!
//! Core modules:
//! - `kana`: Character catalog (levels, romaji, visually similar groups)
//! - `sim`: Deterministic round state machine (physics, landing, scoring, pause stack)
//! - `input`: Keyboard/pointer translation into state machine calls
//! - `driver`: Frame/timer/auto-advance scheduling around the state machine
//! - `persistence`: Key/value storage for settings and statistics
//! - `platform`: Browser bindings (wasm32 only)

pub mod driver;
pub mod input;
pub mod kana;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use driver::{GameDriver, PauseSource};
pub use kana::{BuiltinCatalog, CharacterSet, Kana, KanaCatalog, Level};
pub use settings::Settings;
pub use sim::{KanaGame, LandingEvent, RoundState, SpeedSetting};

/// Game configuration constants
pub mod consts {
    /// Vertical position (percent) at which the falling character lands
    pub const LANDING_HEIGHT: f32 = 85.0;
    /// Height a manual drop jumps to; the fall finishes the last stretch
    pub const DROP_HEIGHT: f32 = 80.0;
    /// Horizontal start position (percent)
    pub const START_X: f32 = 50.0;
    /// Arrow-key nudge (percent)
    pub const MOVE_STEP: f32 = 5.0;

    /// Answer columns across the play field
    pub const COLUMN_COUNT: usize = 5;
    /// Choices shown per round (one correct)
    pub const CHOICE_COUNT: usize = 5;
    /// Wrong answers per round
    pub const DISTRACTOR_COUNT: usize = CHOICE_COUNT - 1;
    /// Visually similar distractors preferred per round
    pub const MAX_SIMILAR_DISTRACTORS: usize = 2;

    /// Correct answers per "round complete" celebration
    pub const ROUND_COMPLETE_THRESHOLD: u32 = 10;

    /// Delay before the next round after a normal landing
    pub const FEEDBACK_DELAY_MS: u32 = 2000;
    /// Delay before the next round after a round-complete landing
    pub const ROUND_COMPLETE_DELAY_MS: u32 = 5000;
    /// Elapsed-time timer period
    pub const TIMER_INTERVAL_MS: f64 = 1000.0;

    /// Level used when nothing (or garbage) is stored
    pub const DEFAULT_LEVEL: u32 = 1;
    /// Highest level in the built-in catalog
    pub const MAX_LEVEL: u32 = 22;
}

/// Column index under a horizontal position (percent), clamped to the field
#[inline]
pub fn column_for_x(x: f32) -> usize {
    let column = ((x / 100.0) * consts::COLUMN_COUNT as f32).floor();
    column.clamp(0.0, (consts::COLUMN_COUNT - 1) as f32) as usize
}

/// Horizontal center (percent) of a column
#[inline]
pub fn column_center(index: usize) -> f32 {
    index as f32 * 20.0 + 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_for_x() {
        assert_eq!(column_for_x(0.0), 0);
        assert_eq!(column_for_x(19.9), 0);
        assert_eq!(column_for_x(20.0), 1);
        assert_eq!(column_for_x(42.0), 2);
        assert_eq!(column_for_x(99.9), 4);
        // x = 100 would be column 5 without the clamp
        assert_eq!(column_for_x(100.0), 4);
    }

    #[test]
    fn test_column_center_round_trips() {
        for i in 0..consts::COLUMN_COUNT {
            assert_eq!(column_for_x(column_center(i)), i);
        }
    }
}
