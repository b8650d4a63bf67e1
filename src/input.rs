//! Keyboard/pointer input
//!
//! Translates keys and column taps into state machine calls. Uses the same
//! column formulas as landing so "tap the current column to drop" lines up
//! with the column that gets scored.

use rand::Rng;

use crate::consts::*;
use crate::kana::{Kana, KanaCatalog};
use crate::sim::{KanaGame, RoundState};
use crate::{column_center, column_for_x};

/// Game keys (DOM `KeyboardEvent.key` names map onto these)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Down,
    Space,
    Enter,
    /// 1-based column digit
    Digit(u8),
    Letter(char),
}

impl Key {
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowDown" => Some(Key::Down),
            " " | "Spacebar" => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            _ => {
                let mut chars = name.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                match c {
                    '1'..='5' => Some(Key::Digit(c as u8 - b'0')),
                    c if c.is_ascii_alphabetic() => Some(Key::Letter(c.to_ascii_lowercase())),
                    _ => None,
                }
            }
        }
    }
}

/// What an input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Moved,
    Dropped,
    /// Skipped the feedback wait and started the next round
    Advanced,
    Ignored,
}

/// Apply a key press
pub fn handle_key<C: KanaCatalog, R: Rng>(game: &mut KanaGame<C, R>, key: Key) -> InputAction {
    let state = game.state();
    if !state.is_playing {
        return InputAction::Ignored;
    }

    if matches!(key, Key::Space | Key::Enter | Key::Down) && state.is_showing_feedback {
        game.initialize_round();
        return InputAction::Advanced;
    }
    if !state.is_falling() {
        return InputAction::Ignored;
    }

    let x = state.position.x;
    match key {
        Key::Left => game.update_position(Some(x - MOVE_STEP), None),
        Key::Right => game.update_position(Some(x + MOVE_STEP), None),
        Key::Digit(n) if (1..=COLUMN_COUNT as u8).contains(&n) => {
            game.update_position(Some(column_center(n as usize - 1)), None)
        }
        Key::Digit(_) => return InputAction::Ignored,
        Key::Letter(letter) => {
            let Some(column) = next_column_for_letter(&state.choices, column_for_x(x), letter)
            else {
                return InputAction::Ignored;
            };
            game.update_position(Some(column_center(column)), None)
        }
        Key::Space | Key::Enter | Key::Down => {
            game.update_position(None, Some(DROP_HEIGHT));
            return InputAction::Dropped;
        }
    }
    InputAction::Moved
}

/// Tap/click on an answer column: move there, or drop if already there
pub fn handle_column_click<C: KanaCatalog, R: Rng>(
    game: &mut KanaGame<C, R>,
    index: usize,
) -> InputAction {
    let state = game.state();
    if index >= COLUMN_COUNT || !state.is_playing || !state.is_falling() {
        return InputAction::Ignored;
    }
    let target_x = column_center(index);
    if state.current_column() == index {
        game.update_position(Some(target_x), Some(DROP_HEIGHT));
        InputAction::Dropped
    } else {
        game.update_position(Some(target_x), None);
        InputAction::Moved
    }
}

/// Next column after `current` (wrapping) whose romaji starts with `letter`
pub fn next_column_for_letter(choices: &[Kana], current: usize, letter: char) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    let count = choices.len();
    (1..=count)
        .map(|offset| (current + offset) % count)
        .find(|&i| choices[i].romaji.starts_with(letter))
}

/// Demo-mode steering: x to head for this frame, aiming at the correct
/// column when `aim_correct`, otherwise at a neighbour
pub fn autopilot_target(state: &RoundState, aim_correct: bool) -> Option<f32> {
    let correct = state.correct_column()?;
    let column = if aim_correct {
        correct
    } else {
        (correct + 1) % COLUMN_COUNT
    };
    let goal = column_center(column);
    let x = state.position.x;
    // One nudge per frame toward the goal
    let step = (goal - x).clamp(-MOVE_STEP / 4.0, MOVE_STEP / 4.0);
    Some(x + step)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_game() -> KanaGame {
        let mut game = KanaGame::new(21);
        game.start_game();
        game.initialize_round();
        game
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key_name(" "), Some(Key::Space));
        assert_eq!(Key::from_key_name("3"), Some(Key::Digit(3)));
        assert_eq!(Key::from_key_name("K"), Some(Key::Letter('k')));
        assert_eq!(Key::from_key_name("9"), None);
        assert_eq!(Key::from_key_name("Shift"), None);
        assert_eq!(Key::from_key_name(""), None);
    }

    #[test]
    fn test_arrows_move_five_percent() {
        let mut game = playing_game();
        assert_eq!(handle_key(&mut game, Key::Left), InputAction::Moved);
        assert_eq!(game.state().position.x, 45.0);
        handle_key(&mut game, Key::Right);
        handle_key(&mut game, Key::Right);
        assert_eq!(game.state().position.x, 55.0);
    }

    #[test]
    fn test_digits_jump_to_column_centers() {
        let mut game = playing_game();
        for n in 1..=5u8 {
            handle_key(&mut game, Key::Digit(n));
            assert_eq!(game.state().position.x, (n as f32 - 1.0) * 20.0 + 10.0);
        }
        assert_eq!(handle_key(&mut game, Key::Digit(0)), InputAction::Ignored);
    }

    #[test]
    fn test_letter_cycles_matching_columns() {
        let choices = vec![
            Kana::new("か", "ka"),
            Kana::new("あ", "a"),
            Kana::new("き", "ki"),
            Kana::new("う", "u"),
            Kana::new("く", "ku"),
        ];
        assert_eq!(next_column_for_letter(&choices, 0, 'k'), Some(2));
        assert_eq!(next_column_for_letter(&choices, 2, 'k'), Some(4));
        assert_eq!(next_column_for_letter(&choices, 4, 'K'), Some(0));
        assert_eq!(next_column_for_letter(&choices, 3, 'u'), Some(3));
        assert_eq!(next_column_for_letter(&choices, 0, 'z'), None);
        assert_eq!(next_column_for_letter(&[], 0, 'a'), None);
    }

    #[test]
    fn test_drop_then_advance() {
        let mut game = playing_game();
        assert_eq!(handle_key(&mut game, Key::Space), InputAction::Dropped);
        assert_eq!(game.state().position.y, DROP_HEIGHT);

        while game.frame().is_none() {}
        assert!(game.state().is_showing_feedback);
        // Movement is frozen during feedback
        assert_eq!(handle_key(&mut game, Key::Left), InputAction::Ignored);

        assert_eq!(handle_key(&mut game, Key::Enter), InputAction::Advanced);
        assert!(!game.state().is_showing_feedback);
        assert_eq!(game.state().position.y, 0.0);
    }

    #[test]
    fn test_column_click_moves_then_drops() {
        let mut game = playing_game();
        assert_eq!(handle_column_click(&mut game, 4), InputAction::Moved);
        assert_eq!(game.state().position.x, 90.0);
        assert_eq!(game.state().position.y, 0.0);

        assert_eq!(handle_column_click(&mut game, 4), InputAction::Dropped);
        assert_eq!(game.state().position.y, DROP_HEIGHT);
        assert_eq!(handle_column_click(&mut game, 7), InputAction::Ignored);
    }

    #[test]
    fn test_input_ignored_when_paused_or_idle() {
        let mut game = playing_game();
        game.push_pause();
        assert_eq!(handle_key(&mut game, Key::Right), InputAction::Ignored);
        assert_eq!(handle_column_click(&mut game, 0), InputAction::Ignored);
        assert_eq!(game.state().position.x, 50.0);

        let mut idle = KanaGame::new(1);
        assert_eq!(handle_key(&mut idle, Key::Space), InputAction::Ignored);
    }

    #[test]
    fn test_autopilot_reaches_correct_column() {
        let mut game = playing_game();
        loop {
            let x = autopilot_target(game.state(), true).unwrap();
            game.update_position(Some(x), None);
            if let Some(event) = game.frame() {
                assert!(event.is_correct);
                break;
            }
        }
    }
}
