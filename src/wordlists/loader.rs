//! Word list loading utilities
//!
//! Functions to turn embedded constants or external files into validated
//! `Word` vectors.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entries of the wrong length or with invalid characters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use seven_wordles::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/common.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed, word_length).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use seven_wordles::wordlists::COMMON;
/// use seven_wordles::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(COMMON, 5);
/// assert_eq!(words.len(), COMMON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s, word_length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crate", "slate", "irate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crate");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crate", "toolong", "abc", "slate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crate");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_respects_length() {
        let input = &["dart", "crate", "herd"];
        let words = words_from_slice(input, 4);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "dart");
        assert_eq!(words[1].text(), "herd");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input, 5);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_common() {
        use crate::wordlists::COMMON;

        let words = words_from_slice(COMMON, 5);
        assert_eq!(words.len(), COMMON.len());
    }
}
