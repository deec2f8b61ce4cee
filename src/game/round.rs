//! Round state machine
//!
//! One round is one attempt to guess a single target word within the guess
//! limit. `Playing → Won` and `Playing → Lost` are the only transitions and
//! both are terminal; a terminal round absorbs every input. Starting the
//! next round discards the whole `Round` value.

use crate::core::{CluedLetter, Word, evaluate};
use crate::wordlists::Dictionary;

/// Round outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

/// Result of submitting the pending guess
///
/// `TooShort` and `NotInDictionary` are rejections that leave the round
/// unchanged. The other variants report the transition taken after the guess
/// was locked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Pending guess shorter than the word length; nothing changed
    TooShort,
    /// Pending guess is not an accepted word; nothing changed
    NotInDictionary,
    /// Guess matched the target
    Won,
    /// Guess locked in, round continues
    Miss,
    /// Guess locked in and the guess limit was reached
    Lost,
}

/// State of a single round
#[derive(Debug)]
pub struct Round {
    target: Word,
    rows: Vec<Vec<CluedLetter>>,
    pending: String,
    outcome: Outcome,
}

impl Round {
    /// Start a fresh round against `target`
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            rows: Vec::new(),
            pending: String::new(),
            outcome: Outcome::Playing,
        }
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Locked-in rows, in submission order, immutable once added
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<CluedLetter>] {
        &self.rows
    }

    /// The guess currently being typed
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// The pending guess as an unevaluated display row
    #[must_use]
    pub fn pending_row(&self) -> Vec<CluedLetter> {
        self.pending.chars().map(CluedLetter::pending).collect()
    }

    /// Append a letter to the pending guess
    ///
    /// Ignored while terminal, once the pending guess is full, or for
    /// anything that is not a lowercase ASCII letter.
    pub fn push_letter(&mut self, letter: char) {
        if self.outcome == Outcome::Playing
            && self.pending.len() < self.target.len()
            && letter.is_ascii_lowercase()
        {
            self.pending.push(letter);
        }
    }

    /// Remove the last letter of the pending guess, if any
    pub fn delete_letter(&mut self) {
        if self.outcome == Outcome::Playing {
            self.pending.pop();
        }
    }

    /// Submit the pending guess
    ///
    /// Returns `None` while the round is terminal (submission is a no-op
    /// there; advancement is the session's job). Otherwise validates the
    /// pending guess, and on acceptance locks it in, evaluates it against
    /// the target and applies the win/loss transition. A winning guess on
    /// the final attempt is `Won`, never `Lost`.
    pub fn submit(&mut self, dictionary: &Dictionary, max_guesses: usize) -> Option<SubmitResult> {
        if self.outcome != Outcome::Playing {
            return None;
        }

        if self.pending.len() != self.target.len() {
            return Some(SubmitResult::TooShort);
        }
        if !dictionary.contains(&self.pending) {
            return Some(SubmitResult::NotInDictionary);
        }

        // Only validated lowercase letters ever reach `pending`
        let guess = Word::new(self.pending.as_str(), self.target.len())
            .expect("pending guess is validated lowercase ASCII");
        let won = guess == self.target;

        self.rows.push(evaluate(&guess, &self.target));
        self.pending.clear();

        if won {
            self.outcome = Outcome::Won;
            Some(SubmitResult::Won)
        } else if self.rows.len() == max_guesses {
            self.outcome = Outcome::Lost;
            Some(SubmitResult::Lost)
        } else {
            Some(SubmitResult::Miss)
        }
    }

    /// Forfeit the round, forcing `Lost`
    ///
    /// Allowed only while playing and only after at least one locked-in
    /// guess. Returns whether the forfeit took effect.
    pub fn give_up(&mut self) -> bool {
        if self.outcome == Outcome::Playing && !self.rows.is_empty() {
            self.outcome = Outcome::Lost;
            self.pending.clear();
            true
        } else {
            false
        }
    }
}
