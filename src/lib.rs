//! Seven Wordles
//!
//! A timed word-guessing game: guess seven target words in a row, with a
//! 3 second penalty added to the clock for every wrong guess.
//!
//! # Quick Start
//!
//! ```rust
//! use seven_wordles::core::{evaluate, Clue, Word};
//!
//! let guess = Word::new("crate", 5).unwrap();
//! let target = Word::new("trace", 5).unwrap();
//!
//! let clues = evaluate(&guess, &target);
//! assert_eq!(clues[1].clue, Some(Clue::Correct)); // R in place
//! assert_eq!(clues[3].clue, Some(Clue::Elsewhere)); // T elsewhere
//! ```

// Core domain types
pub mod core;

// Game state: rounds, session, targets
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
