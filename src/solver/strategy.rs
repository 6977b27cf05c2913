//! Guess selection seam
//!
//! A `GuessSelector` picks the next word to play. The tiered letter-frequency
//! scorer is the production implementation; tests plug in scripted ones.

use crate::constraints::ConstraintState;
use crate::core::Word;
use std::cmp::Ordering;

/// A strategy for choosing the next guess
pub trait GuessSelector {
    /// Select a guess given the surviving candidates, the full guess pool and
    /// the current knowledge
    ///
    /// Returns `None` only when there is nothing to choose from.
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        pool: &[&'a Word],
        state: &ConstraintState,
    ) -> Option<&'a Word>;
}

impl<S: GuessSelector + ?Sized> GuessSelector for &S {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        pool: &[&'a Word],
        state: &ConstraintState,
    ) -> Option<&'a Word> {
        (**self).select_guess(candidates, pool, state)
    }
}

/// Always plays the first surviving candidate
///
/// Useful as a baseline and for exercising the session state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl GuessSelector for FirstCandidate {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        pool: &[&'a Word],
        _state: &ConstraintState,
    ) -> Option<&'a Word> {
        candidates.first().or_else(|| pool.first()).copied()
    }
}

/// Best-scoring word with a reproducible tie-break
///
/// Only strictly positive scores compete; equal scores go to the
/// lexicographically smallest word. When nothing scores above zero the first
/// word of `words` is returned.
pub(crate) fn best_scoring<'a, F>(words: &[&'a Word], mut score: F) -> Option<&'a Word>
where
    F: FnMut(&Word) -> f64,
{
    let mut best: Option<(f64, &'a Word)> = None;

    for &word in words {
        let value = score(word);
        if value <= 0.0 {
            continue;
        }
        let replace = match best {
            None => true,
            Some((top, current)) => match value.total_cmp(&top) {
                Ordering::Greater => true,
                Ordering::Equal => word.text() < current.text(),
                Ordering::Less => false,
            },
        };
        if replace {
            best = Some((value, word));
        }
    }

    best.map(|(_, word)| word).or(words.first().copied())
}
