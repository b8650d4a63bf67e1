//! Nested pause tracking
//!
//! Several independent things can pause the game at once (tab hidden,
//! settings open, help open, round-complete hold). Each `push` remembers
//! the flag as it was, each `pop` restores it, so the game only resumes
//! once every source has been released, in whatever order.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseStack {
    /// Pause flag as it was before each outstanding push
    stack: Vec<bool>,
    /// Current (top-level) pause flag
    paused: bool,
}

impl PauseStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current flag and force paused
    pub fn push(&mut self) {
        self.stack.push(self.paused);
        self.paused = true;
    }

    /// Restore the flag recorded by the matching `push`.
    ///
    /// An unbalanced pop is tolerated and leaves the game unpaused.
    pub fn pop(&mut self) {
        self.paused = self.stack.pop().unwrap_or(false);
    }

    /// Set the top-level flag without touching the stack
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the top-level flag (manual pause button)
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Outstanding pushes
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget every outstanding push and unpause
    pub fn clear(&mut self) {
        self.stack.clear();
        self.paused = false;
    }
}
