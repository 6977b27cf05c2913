//! The word corpus
//!
//! Loaded once per process from a newline-delimited file and never mutated.

mod loader;

pub use loader::{CorpusError, load_corpus, words_from_slice};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Ordered, non-empty list of valid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    /// Wrap a word list, rejecting it if empty
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, CorpusError> {
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self { words })
    }

    /// Build a corpus from string literals, skipping invalid entries
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::corpus::Corpus;
    ///
    /// let corpus = Corpus::from_slice(&["crane", "toolong", "slate"]).unwrap();
    /// assert_eq!(corpus.len(), 2);
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, CorpusError> {
        Self::new(words_from_slice(slice))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Pick a secret uniformly at random
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }
}

impl<'c> IntoIterator for &'c Corpus {
    type Item = &'c Word;
    type IntoIter = std::slice::Iter<'c, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
