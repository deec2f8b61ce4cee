//! Validated word representation
//!
//! A Word is a lowercase alphabetic string of a fixed expected length. The
//! length is a game configuration value rather than a hard-coded constant, so
//! it is checked at construction instead of being baked into the type.

use rustc_hash::FxHashMap;
use std::fmt;

/// A guessable word of a fixed length
///
/// Guaranteed to contain exactly `length` ASCII lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, got: usize },
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Word must be exactly {expected} letters, got {got}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so `"CRATE"` and `"crate"`
    /// produce equal words.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains non-alphabetic or non-ASCII characters
    ///
    /// # Examples
    /// ```
    /// use seven_wordles::core::Word;
    ///
    /// let word = Word::new("crate", 5).unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("cr4te", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                got: text.len(),
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True only for the degenerate zero-length configuration
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as bytes (ASCII lowercase, one byte per letter)
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the clue engine as the consumable letter pool for duplicate
    /// handling.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
