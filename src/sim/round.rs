//! Round state machine
//!
//! Idle -> Falling -> Feedback -> Falling ... with pause as an overlay.
//! Owns the catalog and the random source so every transition is
//! synchronous and reproducible from a seed. Timers live with the caller:
//! after a landing, whoever drives the game calls `initialize_round` once
//! the advance delay has passed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::choices::{generate_choices, pick_target};
use super::state::{Feedback, FeedbackKind, FeedbackMessage, RoundState, Score, SpeedSetting};
use super::stats::KanaStatsMap;
use super::tick;
use crate::consts::*;
use crate::kana::{BuiltinCatalog, CharacterSet, KanaCatalog, Level};

/// Emitted once per landing for sound, particles and scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    pub is_correct: bool,
    pub round_complete: bool,
    /// Column the character landed in
    pub column: usize,
}

impl LandingEvent {
    /// How long the result stays up before the next round
    pub fn advance_delay_ms(&self) -> u32 {
        if self.round_complete {
            ROUND_COMPLETE_DELAY_MS
        } else {
            FEEDBACK_DELAY_MS
        }
    }
}

/// The game: round state plus the collaborators transitions need
#[derive(Debug, Clone)]
pub struct KanaGame<C = BuiltinCatalog, R = Pcg32> {
    state: RoundState,
    catalog: C,
    rng: R,
}

impl KanaGame {
    /// Built-in catalog with a seeded PCG stream
    pub fn new(seed: u64) -> Self {
        Self::with_parts(BuiltinCatalog::new(), Pcg32::seed_from_u64(seed))
    }
}

impl<C: KanaCatalog, R: Rng> KanaGame<C, R> {
    pub fn with_parts(catalog: C, rng: R) -> Self {
        Self {
            state: RoundState::default(),
            catalog,
            rng,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Reset score, timer and position and start playing.
    ///
    /// Does not spawn a round; call `initialize_round` right after.
    pub fn start_game(&mut self) {
        let state = &mut self.state;
        state.is_playing = true;
        state.score = Score::default();
        state.elapsed_time = 0;
        state.position = glam::Vec2::new(START_X, 0.0);
        state.velocity = 0.0;
        state.feedback = None;
        log::info!(
            "Game started (level {}, {}, {})",
            state.level,
            state.writing_system.as_str(),
            state.speed_setting.as_str()
        );
    }

    /// Stop playing. Pending advances see `is_playing == false` and do nothing.
    pub fn stop_game(&mut self) {
        self.state.is_playing = false;
        if self.state.round_complete_hold {
            self.state.round_complete_hold = false;
            self.state.pause.pop();
        }
        log::info!(
            "Game stopped ({} correct, {} wrong, {}s)",
            self.state.score.correct,
            self.state.score.wrong,
            self.state.elapsed_time
        );
    }

    /// Draw a new target and choices and put the character back at the top
    pub fn initialize_round(&mut self) {
        let state = &mut self.state;
        if state.round_complete_hold {
            state.round_complete_hold = false;
            state.pause.pop();
        }

        let excluded = state.last_correct_kana.as_deref();
        let Some(kana) = pick_target(
            &self.catalog,
            state.level,
            state.writing_system,
            excluded,
            &mut self.rng,
        ) else {
            log::warn!("Catalog has no kana for level {}", state.level);
            return;
        };
        let choices = generate_choices(
            &self.catalog,
            &kana,
            state.level,
            state.writing_system,
            excluded,
            &mut self.rng,
        );

        state.round += 1;
        log::debug!(
            "Round {}: {} ({}) choices {:?}",
            state.round,
            kana.character,
            kana.romaji,
            choices.iter().map(|k| k.romaji.as_str()).collect::<Vec<_>>()
        );
        state.current_kana = Some(kana);
        state.choices = choices;
        state.position = glam::Vec2::new(START_X, 0.0);
        state.velocity = state.speed_setting.initial_velocity();
        state.feedback = None;
        state.is_showing_feedback = false;
    }

    /// Move the character, clamped to the field. `None` leaves an axis alone.
    pub fn update_position(&mut self, x: Option<f32>, y: Option<f32>) {
        if let Some(x) = x {
            self.state.position.x = x.clamp(0.0, 100.0);
        }
        if let Some(y) = y {
            self.state.position.y = y.clamp(0.0, LANDING_HEIGHT);
        }
    }

    /// One frame of falling (no-op while idle, paused or showing feedback)
    pub fn animate_frame(&mut self) {
        tick::animate_frame(&mut self.state);
    }

    /// Score the round if the character has reached the answer row.
    ///
    /// The answer is the column under the character at this moment. Once
    /// feedback is showing, further calls do nothing until the next round.
    pub fn check_landing(&mut self) -> Option<LandingEvent> {
        let state = &mut self.state;
        if !state.has_landed() || state.is_showing_feedback {
            return None;
        }
        let target = state.current_kana.clone()?;

        let column = state.current_column();
        let Some(guess) = state.choices.get(column).cloned() else {
            log::warn!("No choice in column {} ({} choices)", column, state.choices.len());
            return None;
        };
        let is_correct = guess.romaji == target.romaji;

        if is_correct {
            state.score.correct += 1;
            state.last_correct_kana = Some(target.character.clone());
        } else {
            state.score.wrong += 1;
        }
        state.stats.record(&target.character, is_correct, state.round);

        let round_complete = is_correct && state.score.correct % ROUND_COMPLETE_THRESHOLD == 0;
        let (kind, message) = if round_complete {
            (
                FeedbackKind::RoundComplete,
                FeedbackMessage::round_complete(state.score.correct),
            )
        } else if is_correct {
            (FeedbackKind::Correct, FeedbackMessage::correct(&target))
        } else {
            (FeedbackKind::Wrong, FeedbackMessage::wrong(&guess, &target))
        };

        if round_complete {
            state.pause.push();
            state.round_complete_hold = true;
            log::info!("Round complete at {} correct", state.score.correct);
        }

        log::debug!(
            "Landed in column {}: {} for {} ({})",
            column,
            guess.romaji,
            target.romaji,
            if is_correct { "correct" } else { "wrong" }
        );

        state.is_showing_feedback = true;
        state.feedback = Some(Feedback {
            is_correct,
            kind,
            character: target.character,
            guessed_choice: guess,
            message,
        });

        Some(LandingEvent {
            is_correct,
            round_complete,
            column,
        })
    }

    /// Animation step followed by the landing check, in that order, so a
    /// landing is scored in the frame it happens
    pub fn frame(&mut self) -> Option<LandingEvent> {
        self.animate_frame();
        self.check_landing()
    }

    /// One second of play time
    pub fn tick_timer(&mut self) {
        self.state.elapsed_time += 1;
    }

    pub fn push_pause(&mut self) {
        self.state.pause.push();
    }

    pub fn pop_pause(&mut self) {
        self.state.pause.pop();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.pause.set_paused(paused);
    }

    pub fn toggle_pause(&mut self) {
        self.state.pause.toggle();
    }

    /// Takes effect from the next round. Clamped to the catalog's levels.
    pub fn set_level(&mut self, level: Level) {
        self.state.level = level.clamp(1, MAX_LEVEL);
    }

    /// Takes effect from the next round
    pub fn set_writing_system(&mut self, writing_system: CharacterSet) {
        self.state.writing_system = writing_system;
    }

    /// Changes acceleration immediately and spawn speed from the next round
    pub fn set_speed_setting(&mut self, speed: SpeedSetting) {
        self.state.speed_setting = speed;
    }

    /// Replace the statistics (e.g. with a loaded copy)
    pub fn set_stats(&mut self, stats: KanaStatsMap) {
        self.state.stats = stats;
    }
}
