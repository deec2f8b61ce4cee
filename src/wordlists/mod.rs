//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, plus the
//! `Dictionary` membership set used to validate guesses.

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT, DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Accepted-guess membership set
///
/// The game only needs set membership over the accepted list; everything
/// else about the word data is opaque.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from validated words
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Whether `text` is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
