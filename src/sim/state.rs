//! Round state and core simulation types
//!
//! Everything the presentation layer reads lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pause::PauseStack;
use super::stats::KanaStatsMap;
use crate::consts::*;
use crate::kana::{CharacterSet, Kana, Level};

/// Fall speed preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeedSetting {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedSetting::Slow => "slow",
            SpeedSetting::Normal => "normal",
            SpeedSetting::Fast => "fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(SpeedSetting::Slow),
            "normal" => Some(SpeedSetting::Normal),
            "fast" => Some(SpeedSetting::Fast),
            _ => None,
        }
    }

    /// Fall speed at spawn (percent/frame)
    pub fn initial_velocity(&self) -> f32 {
        match self {
            SpeedSetting::Slow => 0.05,
            SpeedSetting::Normal => 0.10,
            SpeedSetting::Fast => 0.15,
        }
    }

    /// Added to the fall speed every frame (percent/frame²)
    pub fn acceleration(&self) -> f32 {
        match self {
            SpeedSetting::Slow => 0.0025,
            SpeedSetting::Normal => 0.005,
            SpeedSetting::Fast => 0.01,
        }
    }
}

/// Correct / wrong tally for the current game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

/// What kind of result is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    Correct,
    Wrong,
    /// Correct answer that also completed a block of ROUND_COMPLETE_THRESHOLD
    RoundComplete,
}

/// Bilingual feedback line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    pub en: String,
    pub ja: String,
}

impl FeedbackMessage {
    pub fn correct(target: &Kana) -> Self {
        Self {
            en: format!("\"{}\" is the correct romaji!", target.romaji),
            ja: format!("\"{}\"が正解です", target.character),
        }
    }

    pub fn wrong(guess: &Kana, target: &Kana) -> Self {
        Self {
            en: format!(
                "\"{}\" is incorrect. The correct answer is \"{}\".",
                guess.romaji, target.romaji
            ),
            ja: format!(
                "\"{}\"は違います。正解は\"{}\"です",
                guess.character, target.character
            ),
        }
    }

    pub fn round_complete(correct: u32) -> Self {
        let text = format!("Round Complete! Score: {}", correct);
        Self {
            en: text.clone(),
            ja: text,
        }
    }
}

/// Result of the last landing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub kind: FeedbackKind,
    /// The target character
    pub character: String,
    /// Choice under the character when it landed
    pub guessed_choice: Kana,
    pub message: FeedbackMessage,
}

/// Primary state; pause is an overlay on `Falling` and `Feedback`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not playing
    Idle,
    /// Character in flight
    Falling,
    /// Landed, result visible, waiting for the next round
    Feedback,
}

/// Complete round state (single authoritative instance)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub level: Level,
    pub writing_system: CharacterSet,
    pub speed_setting: SpeedSetting,
    pub is_playing: bool,
    pub is_showing_feedback: bool,
    /// Nested pause sources
    pub pause: PauseStack,
    /// Target for the active round
    pub current_kana: Option<Kana>,
    /// Answer columns, left to right
    pub choices: Vec<Kana>,
    /// Falling character position (percent of the play field)
    pub position: Vec2,
    /// Fall speed (percent/frame)
    pub velocity: f32,
    pub score: Score,
    /// Seconds played
    pub elapsed_time: u32,
    pub feedback: Option<Feedback>,
    /// Last correctly answered character, kept out of the next draw
    pub last_correct_kana: Option<String>,
    /// Rounds started since launch
    pub round: u32,
    pub stats: KanaStatsMap,
    /// A round-complete landing pushed a pause that the next round releases
    #[serde(default)]
    pub round_complete_hold: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            writing_system: CharacterSet::default(),
            speed_setting: SpeedSetting::default(),
            is_playing: false,
            is_showing_feedback: false,
            pause: PauseStack::new(),
            current_kana: None,
            choices: Vec::new(),
            position: Vec2::new(START_X, 0.0),
            velocity: 0.0,
            score: Score::default(),
            elapsed_time: 0,
            feedback: None,
            last_correct_kana: None,
            round: 0,
            stats: KanaStatsMap::new(),
            round_complete_hold: false,
        }
    }
}

impl RoundState {
    pub fn is_game_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn phase(&self) -> GamePhase {
        if !self.is_playing {
            GamePhase::Idle
        } else if self.is_showing_feedback {
            GamePhase::Feedback
        } else {
            GamePhase::Falling
        }
    }

    /// True while the falling character should move
    pub fn is_falling(&self) -> bool {
        self.phase() == GamePhase::Falling && !self.is_game_paused()
    }

    /// Column the character is currently over
    pub fn current_column(&self) -> usize {
        crate::column_for_x(self.position.x)
    }

    /// Column holding the correct answer
    pub fn correct_column(&self) -> Option<usize> {
        let target = self.current_kana.as_ref()?;
        self.choices.iter().position(|k| k.romaji == target.romaji)
    }

    pub fn has_landed(&self) -> bool {
        self.position.y >= LANDING_HEIGHT
    }
}
