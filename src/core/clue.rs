//! Per-letter guess feedback
//!
//! Comparing a guess against the hidden target classifies every guess letter
//! as Absent, Elsewhere (in the word, wrong position) or Correct. The enum
//! order matters: when merging knowledge about a letter across rows, the
//! higher clue wins.

use super::Word;

/// Classification of one guessed letter relative to the target
///
/// Ordered so that `Correct > Elsewhere > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Clue {
    Absent,
    Elsewhere,
    Correct,
}

/// A letter paired with its clue
///
/// `clue` is `None` for positions that have not been evaluated yet (the
/// pending, not-yet-submitted row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CluedLetter {
    pub letter: char,
    pub clue: Option<Clue>,
}

impl CluedLetter {
    /// A letter in the pending row, not yet evaluated
    #[inline]
    #[must_use]
    pub const fn pending(letter: char) -> Self {
        Self { letter, clue: None }
    }
}

/// Evaluate a guess against a target, producing one clue per guess letter
///
/// Implements the standard feedback rules with proper handling of duplicate
/// letters: each target letter can be credited at most once.
///
/// # Algorithm
/// 1. Build a consumable count of the target's letters.
/// 2. First pass: mark every exact position match Correct and consume that
///    letter. This pass runs to completion before any Elsewhere is awarded,
///    so an exact match can never be "stolen" by an earlier duplicate in the
///    guess.
/// 3. Second pass, left to right over unresolved positions: mark Elsewhere
///    while the letter still has count remaining, otherwise Absent.
///
/// Output order matches guess order.
///
/// # Panics
/// Panics if the guess and target lengths differ. Both come from `Word`
/// values validated against the same configured length, so a mismatch is a
/// programming error.
///
/// # Examples
/// ```
/// use seven_wordles::core::{evaluate, Clue, Word};
///
/// let guess = Word::new("robot", 5).unwrap();
/// let target = Word::new("floor", 5).unwrap();
/// let clues: Vec<_> = evaluate(&guess, &target)
///     .iter()
///     .map(|cl| cl.clue.unwrap())
///     .collect();
///
/// // R(elsewhere) O(elsewhere) B(absent) O(correct) T(absent)
/// use Clue::{Absent, Correct, Elsewhere};
/// assert_eq!(clues, vec![Elsewhere, Elsewhere, Absent, Correct, Absent]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Vec<CluedLetter> {
    assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have equal length"
    );

    let g = guess.bytes();
    let t = target.bytes();
    let mut remaining = target.letter_counts();
    let mut clues: Vec<Option<Clue>> = vec![None; g.len()];

    // First pass: exact matches consume their target letter
    // Allow: index needed to compare guess[i] with target[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..g.len() {
        if g[i] == t[i] {
            clues[i] = Some(Clue::Correct);
            if let Some(count) = remaining.get_mut(&g[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: unresolved positions, left to right
    #[allow(clippy::needless_range_loop)]
    for i in 0..g.len() {
        if clues[i].is_none() {
            match remaining.get_mut(&g[i]) {
                Some(count) if *count > 0 => {
                    clues[i] = Some(Clue::Elsewhere);
                    *count -= 1;
                }
                _ => clues[i] = Some(Clue::Absent),
            }
        }
    }

    guess
        .text()
        .chars()
        .zip(clues)
        .map(|(letter, clue)| CluedLetter { letter, clue })
        .collect()
}
