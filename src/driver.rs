//! Game loop driver
//!
//! Owns the scheduling the state machine deliberately leaves out: the
//! per-frame callback, the one-second play timer, the one-shot advance
//! after a landing, pause sources from the UI, and persistence. Time comes
//! in from the caller as a millisecond timestamp (requestAnimationFrame's
//! argument in the browser), which keeps this testable without a clock.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::TIMER_INTERVAL_MS;
use crate::input::{self, InputAction, Key};
use crate::kana::{BuiltinCatalog, CharacterSet, KanaCatalog, Level};
use crate::persistence::{self, KeyValueStore, StorageError};
use crate::settings::Settings;
use crate::sim::{KanaGame, LandingEvent, SpeedSetting};

/// Independent reasons to hold the game paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseSource {
    /// Tab hidden or window lost focus
    Hidden,
    SettingsOpen,
    HelpOpen,
    /// Pause button
    Manual,
}

pub struct GameDriver<S: KeyValueStore, C: KanaCatalog = BuiltinCatalog, R: Rng = Pcg32> {
    game: KanaGame<C, R>,
    store: S,
    settings: Settings,
    /// Frame and timer callbacks are live
    scheduled: bool,
    last_frame_ms: Option<f64>,
    timer_accumulator_ms: f64,
    /// When the pending one-shot advance fires
    advance_at_ms: Option<f64>,
    active_sources: Vec<PauseSource>,
    /// Last non-fatal failure, shown until dismissed
    notice: Option<String>,
}

impl<S: KeyValueStore> GameDriver<S> {
    /// Built-in catalog, seeded RNG, settings and statistics from `store`
    pub fn new(store: S, seed: u64) -> Self {
        Self::with_game(store, KanaGame::new(seed))
    }
}

impl<S: KeyValueStore, C: KanaCatalog, R: Rng> GameDriver<S, C, R> {
    pub fn with_game(store: S, mut game: KanaGame<C, R>) -> Self {
        let settings = Settings::load(&store);
        game.set_level(settings.level);
        game.set_writing_system(settings.writing_system);
        game.set_speed_setting(settings.speed_setting);
        game.set_stats(persistence::load_stats(&store));
        Self {
            game,
            store,
            settings,
            scheduled: false,
            last_frame_ms: None,
            timer_accumulator_ms: 0.0,
            advance_at_ms: None,
            active_sources: Vec::new(),
            notice: None,
        }
    }

    pub fn game(&self) -> &KanaGame<C, R> {
        &self.game
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether frame/timer callbacks are running
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Timestamp the pending advance fires at, if any
    pub fn pending_advance_ms(&self) -> Option<f64> {
        self.advance_at_ms
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Start a game and its first round, and arm the callbacks
    pub fn start(&mut self, now_ms: f64) {
        self.game.start_game();
        self.game.initialize_round();
        self.scheduled = true;
        self.last_frame_ms = Some(now_ms);
        self.timer_accumulator_ms = 0.0;
        self.advance_at_ms = None;
    }

    /// Stop the game and cancel every callback, including a pending advance
    pub fn stop(&mut self) {
        self.game.stop_game();
        self.scheduled = false;
        self.last_frame_ms = None;
        self.advance_at_ms = None;
    }

    /// Per-frame callback
    pub fn frame(&mut self, now_ms: f64) -> Option<LandingEvent> {
        if !self.scheduled {
            return None;
        }
        let dt = self.last_frame_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_frame_ms = Some(now_ms);

        if let Some(at) = self.advance_at_ms {
            if now_ms >= at {
                self.advance_at_ms = None;
                // The game may have stopped while the advance was pending
                if self.game.state().is_playing {
                    self.game.initialize_round();
                }
            }
        }

        self.run_timer(dt);

        let event = self.game.frame();
        if let Some(event) = event {
            self.advance_at_ms = Some(now_ms + event.advance_delay_ms() as f64);
            self.persist_stats();
        }
        event
    }

    /// Accumulate play time; one `tick_timer` per full second unpaused
    fn run_timer(&mut self, dt: f64) {
        let state = self.game.state();
        if !state.is_playing || state.is_game_paused() {
            return;
        }
        self.timer_accumulator_ms += dt;
        while self.timer_accumulator_ms >= TIMER_INTERVAL_MS {
            self.timer_accumulator_ms -= TIMER_INTERVAL_MS;
            self.game.tick_timer();
        }
    }

    /// Assert or release a pause source. Repeats of the same state are ignored
    /// so each source holds at most one stack entry.
    ///
    /// Any change restarts frame timing: frames may not have run while
    /// paused (hidden tabs get no animation frames), and that gap is not
    /// play time.
    pub fn set_pause_source(&mut self, source: PauseSource, active: bool) {
        let held = self.active_sources.contains(&source);
        if active && !held {
            self.active_sources.push(source);
            self.game.push_pause();
            log::info!("Paused ({:?})", source);
        } else if !active && held {
            self.active_sources.retain(|s| *s != source);
            self.game.pop_pause();
            log::info!("Released pause ({:?})", source);
        } else {
            return;
        }
        self.last_frame_ms = None;
    }

    /// Window blur or a hidden document holds `Hidden`; only a focused,
    /// visible page releases it
    pub fn update_visibility(&mut self, window_blurred: bool, document_hidden: bool) {
        self.set_pause_source(PauseSource::Hidden, window_blurred || document_hidden);
    }

    pub fn is_source_active(&self, source: PauseSource) -> bool {
        self.active_sources.contains(&source)
    }

    pub fn toggle_pause_source(&mut self, source: PauseSource) {
        let active = self.is_source_active(source);
        self.set_pause_source(source, !active);
    }

    /// Keyboard input; ignored while settings or help cover the field
    pub fn key(&mut self, key: Key) -> InputAction {
        if self.is_source_active(PauseSource::SettingsOpen)
            || self.is_source_active(PauseSource::HelpOpen)
        {
            return InputAction::Ignored;
        }
        let action = input::handle_key(&mut self.game, key);
        if action == InputAction::Advanced {
            self.advance_at_ms = None;
        }
        action
    }

    pub fn column_click(&mut self, index: usize) -> InputAction {
        input::handle_column_click(&mut self.game, index)
    }

    /// Free horizontal positioning (pointer drag, autopilot)
    pub fn steer(&mut self, x: f32) -> InputAction {
        if !self.game.state().is_playing || !self.game.state().is_falling() {
            return InputAction::Ignored;
        }
        self.game.update_position(Some(x), None);
        InputAction::Moved
    }

    /// Change level (next round) and persist it
    pub fn set_level(&mut self, level: Level) {
        self.game.set_level(level);
        self.settings.level = self.game.state().level;
        let result = self.settings.save_level(&mut self.store);
        self.report(result);
    }

    pub fn set_writing_system(&mut self, writing_system: CharacterSet) {
        self.game.set_writing_system(writing_system);
        self.settings.writing_system = writing_system;
        let result = self.settings.save(&mut self.store);
        self.report(result);
    }

    pub fn set_speed_setting(&mut self, speed: SpeedSetting) {
        self.game.set_speed_setting(speed);
        self.settings.speed_setting = speed;
        let result = self.settings.save(&mut self.store);
        self.report(result);
    }

    fn persist_stats(&mut self) {
        let result = persistence::save_stats(&mut self.store, &self.game.state().stats);
        self.report(result);
    }

    /// Turn a storage failure into a notice; play continues either way
    fn report(&mut self, result: Result<(), StorageError>) {
        if let Err(err) = result {
            log::warn!("Storage failure: {}", err);
            self.notice = Some(format!("Could not save progress: {}", err));
        }
    }
}
