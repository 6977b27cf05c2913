//! Candidate word representation
//!
//! A `Word` is an immutable, validated 5-letter lowercase word. It keeps a
//! per-letter position index so the filter and scorer can ask "where does this
//! letter occur" and "how many times" without rescanning the text.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word drawn from the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains characters outside a-z")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("apples").is_err());
    /// assert!(Word::new("app1e").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// All positions where a letter appears, empty if it does not appear
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// How many times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.positions_of(letter).len()
    }

    /// Distinct letters of the word, in first-occurrence order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, ch)| self.positions_of(*ch).first() == Some(&i))
            .map(|(_, &ch)| ch)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.text(), "apple");
        assert_eq!(word.chars(), b"apple");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("PLANE").unwrap().text(), "plane");
        assert_eq!(Word::new("pLaNe").unwrap(), Word::new("plane").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("apples"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("app"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("app1e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("app e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("appl\u{e9}"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_positions_and_counts() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.positions_of(b'p'), &[1, 2]);
        assert_eq!(word.positions_of(b'a'), &[0]);
        assert_eq!(word.positions_of(b'z'), &[] as &[usize]);
        assert_eq!(word.count_of(b'p'), 2);
        assert_eq!(word.count_of(b'e'), 1);
        assert_eq!(word.count_of(b'q'), 0);
        assert!(word.has_letter(b'l'));
        assert!(!word.has_letter(b'n'));
    }

    #[test]
    fn distinct_letters_skip_repeats() {
        let word = Word::new("sassy").unwrap();
        let letters: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(letters, vec![b's', b'a', b'y']);
    }

    #[test]
    fn word_display() {
        let word = Word::new("angle").unwrap();
        assert_eq!(format!("{word}"), "angle");
    }
}
