//! Tiered letter-frequency scorer
//!
//! Picks one of three tactics depending on how many candidates survive and how
//! many letters are already known to be in the secret.
//!
//! With default thresholds (100, 1000, 4):
//! - **< 100 candidates**: `Probe` - corpus word covering the most untested
//!   letters that still occur among the candidates
//! - **100-999 candidates, < 4 known letters**: `PartialFrequency` - corpus word
//!   with the best positional frequency over untested letters only
//! - **otherwise**: `CandidateFrequency` - candidate with the best positional
//!   frequency over the candidates themselves

use super::strategy::{GuessSelector, best_scoring};
use crate::constraints::{ALPHABET_SIZE, ConstraintState, LetterSet, Presence, letter_index};
use crate::core::{WORD_LENGTH, Word};

/// Which tactic the scorer uses for a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Few candidates: maximize coverage of untested letters
    Probe,
    /// Medium candidates, little known: frequency of untested letters over the corpus
    PartialFrequency,
    /// Many candidates or much known: frequency over the candidates
    CandidateFrequency,
}

impl Tier {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Probe => "probe",
            Self::PartialFrequency => "partial-frequency",
            Self::CandidateFrequency => "candidate-frequency",
        }
    }
}

/// Boundaries between tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Candidates strictly below this use `Probe` (default: 100)
    pub probe_below: usize,
    /// Candidates strictly below this may use `PartialFrequency` (default: 1000)
    pub partial_below: usize,
    /// `PartialFrequency` requires fewer known letters than this (default: 4)
    pub known_letter_limit: usize,
}

impl TierThresholds {
    #[must_use]
    pub const fn new(probe_below: usize, partial_below: usize, known_letter_limit: usize) -> Self {
        Self {
            probe_below,
            partial_below,
            known_letter_limit,
        }
    }

    /// Tier for a turn with `num_candidates` survivors and `known_letters` confirmed letters
    #[must_use]
    pub const fn tier_for(&self, num_candidates: usize, known_letters: usize) -> Tier {
        if num_candidates < self.probe_below {
            Tier::Probe
        } else if num_candidates < self.partial_below && known_letters < self.known_letter_limit {
            Tier::PartialFrequency
        } else {
            Tier::CandidateFrequency
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self::new(100, 1000, 4)
    }
}

/// Relative frequency of each letter at each position
struct PositionalFrequency([[f64; WORD_LENGTH]; ALPHABET_SIZE]);

impl PositionalFrequency {
    /// Count letters of `words` at each position, keeping only letters `include` accepts
    fn from_words(words: &[&Word], include: impl Fn(u8) -> bool) -> Self {
        let mut table = [[0.0; WORD_LENGTH]; ALPHABET_SIZE];
        if words.is_empty() {
            return Self(table);
        }

        for word in words {
            for (i, &letter) in word.chars().iter().enumerate() {
                if include(letter) {
                    table[letter_index(letter)][i] += 1.0;
                }
            }
        }

        let total = words.len() as f64;
        for row in &mut table {
            for cell in row.iter_mut() {
                *cell /= total;
            }
        }

        Self(table)
    }

    /// Sum of positional frequencies, each divided by how often its letter repeats in the word
    fn score(&self, word: &Word) -> f64 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(i, &letter)| self.0[letter_index(letter)][i] / word.count_of(letter) as f64)
            .sum()
    }
}

/// Letters occurring among the candidates whose presence is still unknown
#[must_use]
pub fn probe_letters(candidates: &[&Word], state: &ConstraintState) -> LetterSet {
    candidates
        .iter()
        .flat_map(|word| word.chars().iter().copied())
        .filter(|&letter| state.presence(letter) == Presence::Unknown)
        .collect()
}

/// Tiered heuristic scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredScorer {
    thresholds: TierThresholds,
}

impl TieredScorer {
    #[must_use]
    pub const fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> TierThresholds {
        self.thresholds
    }

    /// The tier this scorer would use for the given situation
    #[must_use]
    pub fn tier(&self, candidates: &[&Word], state: &ConstraintState) -> Tier {
        self.thresholds
            .tier_for(candidates.len(), state.known_letters().len())
    }

    /// Probe tier: pool word covering the most distinct probe letters
    ///
    /// Without any probe letters left there is nothing to learn from a probe,
    /// so the first candidate is played instead.
    fn select_probe<'a>(
        candidates: &[&'a Word],
        pool: &[&'a Word],
        state: &ConstraintState,
    ) -> Option<&'a Word> {
        let probes = probe_letters(candidates, state);
        if probes.is_empty() {
            return candidates.first().or_else(|| pool.first()).copied();
        }

        best_scoring(pool, |word| {
            word.distinct_letters()
                .filter(|&letter| probes.contains(letter))
                .count() as f64
        })
    }

    /// Partial tier: pool word scored on positional frequency of untested letters
    fn select_partial<'a>(pool: &[&'a Word], state: &ConstraintState) -> Option<&'a Word> {
        let known = state.known_letters();
        let frequency = PositionalFrequency::from_words(pool, |letter| {
            !known.contains(letter) && state.presence(letter) == Presence::Unknown
        });

        best_scoring(pool, |word| frequency.score(word))
    }

    /// Candidate tier: candidate scored on positional frequency over the candidates
    fn select_candidate_frequency<'a>(candidates: &[&'a Word]) -> Option<&'a Word> {
        let frequency = PositionalFrequency::from_words(candidates, |_| true);

        best_scoring(candidates, |word| frequency.score(word))
    }
}

impl GuessSelector for TieredScorer {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        pool: &[&'a Word],
        state: &ConstraintState,
    ) -> Option<&'a Word> {
        match self.tier(candidates, state) {
            Tier::Probe => Self::select_probe(candidates, pool, state),
            Tier::PartialFrequency => Self::select_partial(pool, state),
            Tier::CandidateFrequency => Self::select_candidate_frequency(candidates),
        }
    }
}
