//! Small bitsets over letters and positions
//!
//! Both sets only ever grow within a game, so they expose `insert` but no
//! `remove`.

use crate::core::WORD_LENGTH;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter (`b'a'` -> 0)
///
/// # Panics
/// Panics in debug mode if `letter` is not in `a..=z`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be in a..=z");
    (letter - b'a') as usize
}

/// Set of positions 0-4 within a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(u8);

impl PositionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a position; positions past the word length are ignored
    pub const fn insert(&mut self, position: usize) {
        if position < WORD_LENGTH {
            self.0 |= 1 << position;
        }
    }

    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < WORD_LENGTH && self.0 & (1 << position) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when every position in `other` is also in `self`
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LENGTH).filter(move |&p| self.contains(p))
    }
}

/// Set of lowercase letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << letter_index(letter)) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
