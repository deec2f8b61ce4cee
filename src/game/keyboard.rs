//! Keyboard-status aggregation
//!
//! Derived view over the locked-in rows of the current round: the best clue
//! seen so far for every letter, used only for display emphasis. Recomputed
//! from the authoritative row history on every render rather than updated
//! incrementally.

use crate::core::{Clue, CluedLetter};
use rustc_hash::FxHashMap;

/// Fold locked-in rows into the best known clue per letter
///
/// `Correct` beats `Elsewhere` beats `Absent`. Pending rows carry no clues
/// and must not be passed in; positions with `clue: None` are skipped.
#[must_use]
pub fn keyboard_knowledge(rows: &[Vec<CluedLetter>]) -> FxHashMap<char, Clue> {
    let mut info = FxHashMap::default();

    for row in rows {
        for clued in row {
            let Some(clue) = clued.clue else { continue };
            let best = info.entry(clued.letter).or_insert(clue);
            if clue > *best {
                *best = clue;
            }
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn row(guess: &str, target: &str) -> Vec<CluedLetter> {
        let guess = Word::new(guess, 5).unwrap();
        let target = Word::new(target, 5).unwrap();
        evaluate(&guess, &target)
    }

    #[test]
    fn empty_history_knows_nothing() {
        assert!(keyboard_knowledge(&[]).is_empty());
    }

    #[test]
    fn single_row_maps_each_letter() {
        let rows = vec![row("slate", "crate")];
        let info = keyboard_knowledge(&rows);

        assert_eq!(info.get(&'s'), Some(&Clue::Absent));
        assert_eq!(info.get(&'l'), Some(&Clue::Absent));
        assert_eq!(info.get(&'a'), Some(&Clue::Correct));
        assert_eq!(info.get(&'t'), Some(&Clue::Correct));
        assert_eq!(info.get(&'e'), Some(&Clue::Correct));
        assert_eq!(info.get(&'z'), None);
    }

    #[test]
    fn better_clue_wins_across_rows() {
        // 'r' is Elsewhere in the first row, Correct in the second
        let rows = vec![row("ridge", "crate"), row("brace", "crate")];
        let info = keyboard_knowledge(&rows);

        assert_eq!(info.get(&'r'), Some(&Clue::Correct));
    }

    #[test]
    fn better_clue_never_downgraded() {
        // 'a' is Correct in the first row; a later Absent occurrence of a
        // duplicate 'a' must not demote it
        let rows = vec![row("slate", "crate"), row("aargh", "crate")];
        let info = keyboard_knowledge(&rows);

        assert_eq!(info.get(&'a'), Some(&Clue::Correct));
    }

    #[test]
    fn pending_positions_are_skipped() {
        let rows = vec![vec![
            CluedLetter::pending('q'),
            CluedLetter::pending('u'),
        ]];
        assert!(keyboard_knowledge(&rows).is_empty());
    }
}
