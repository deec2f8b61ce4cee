//! Game configuration constants
//!
//! Fixed at construction; nothing here changes at runtime.

use std::time::Duration;

/// Rules of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Guesses allowed per round
    pub max_guesses: usize,
    /// Rounds that must be won to finish a session
    pub total_rounds: usize,
    /// Time added to the clock for each non-winning guess or give-up
    pub penalty_per_guess: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 6,
            total_rounds: 7,
            penalty_per_guess: Duration::from_secs(3),
        }
    }
}
