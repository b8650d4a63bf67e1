//! Per-frame fall step
//!
//! Called once per display refresh. Frame-based (not dt-based): speeds are
//! in percent per frame, matching the refresh-driven loop.

use super::state::RoundState;
use crate::consts::LANDING_HEIGHT;

/// Advance the falling character by one frame.
///
/// Returns true if the character moved. Nothing moves while idle, paused
/// or showing feedback.
pub fn animate_frame(state: &mut RoundState) -> bool {
    if !state.is_falling() {
        return false;
    }

    state.velocity += state.speed_setting.acceleration();
    let y = (state.position.y + state.velocity).min(LANDING_HEIGHT);
    let moved = y != state.position.y;
    state.position.y = y;
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SpeedSetting;
    use proptest::prelude::*;

    /// Frames needed to fall from the top at `speed`
    fn frames_to_land(speed: SpeedSetting) -> u32 {
        let mut state = falling_state(speed);
        let mut frames = 0;
        while animate_frame(&mut state) {
            frames += 1;
        }
        frames
    }

    fn falling_state(speed: SpeedSetting) -> RoundState {
        RoundState {
            is_playing: true,
            speed_setting: speed,
            velocity: speed.initial_velocity(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fall_is_monotonic_then_clamped() {
        let mut state = falling_state(SpeedSetting::Normal);
        let mut last_y = state.position.y;
        let mut last_v = state.velocity;
        while state.position.y < LANDING_HEIGHT {
            assert!(animate_frame(&mut state));
            assert!(state.position.y > last_y);
            assert!(state.velocity > last_v);
            last_y = state.position.y;
            last_v = state.velocity;
        }
        assert_eq!(state.position.y, LANDING_HEIGHT);

        for _ in 0..10 {
            assert!(!animate_frame(&mut state));
            assert_eq!(state.position.y, LANDING_HEIGHT);
        }
    }

    #[test]
    fn test_no_motion_when_paused_or_showing_feedback() {
        let mut state = falling_state(SpeedSetting::Fast);
        state.pause.push();
        assert!(!animate_frame(&mut state));
        assert_eq!(state.position.y, 0.0);
        assert_eq!(state.velocity, SpeedSetting::Fast.initial_velocity());

        state.pause.pop();
        state.is_showing_feedback = true;
        assert!(!animate_frame(&mut state));
        assert_eq!(state.position.y, 0.0);

        state.is_showing_feedback = false;
        state.is_playing = false;
        assert!(!animate_frame(&mut state));
    }

    #[test]
    fn test_faster_settings_land_sooner() {
        let slow = frames_to_land(SpeedSetting::Slow);
        let normal = frames_to_land(SpeedSetting::Normal);
        let fast = frames_to_land(SpeedSetting::Fast);
        assert!(slow > normal && normal > fast);
        // Roughly three seconds at 60 Hz on normal
        assert!((150..=200).contains(&normal), "normal took {} frames", normal);
    }

    proptest! {
        #[test]
        fn prop_y_never_leaves_field(start_y in 0.0f32..=85.0, frames in 0usize..400) {
            let mut state = falling_state(SpeedSetting::Fast);
            state.position.y = start_y;
            for _ in 0..frames {
                animate_frame(&mut state);
                prop_assert!(state.position.y >= start_y);
                prop_assert!(state.position.y <= LANDING_HEIGHT);
            }
        }
    }
}
