//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame-counted physics only (no wall clock)
//! - Injected RNG only
//! - No rendering, audio or platform dependencies

pub mod choices;
pub mod pause;
pub mod round;
pub mod state;
pub mod stats;
pub mod tick;

pub use choices::{candidate_pool, generate_choices, pick_target};
pub use pause::PauseStack;
pub use round::{KanaGame, LandingEvent};
pub use state::{
    Feedback, FeedbackKind, FeedbackMessage, GamePhase, RoundState, Score, SpeedSetting,
};
pub use stats::{KanaStats, KanaStatsMap};
pub use tick::animate_frame;
