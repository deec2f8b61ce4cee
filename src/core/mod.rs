//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero game state.
//! All types here are pure, testable, and have clear mathematical properties.

mod clue;
mod word;

pub use clue::{Clue, CluedLetter, evaluate};
pub use word::{Word, WordError};
