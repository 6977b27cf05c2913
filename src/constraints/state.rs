//! Accumulated knowledge about the secret word
//!
//! A `ConstraintState` is created fresh for every game and only ever gains
//! information: positions are added, presence moves away from `Unknown`
//! once, and the duplicate flag can only be cleared.

use super::letters::{ALPHABET_SIZE, LetterSet, PositionSet, letter_index};
use crate::core::{Feedback, Mark, WORD_LENGTH, Word};

/// Whether a letter is known to be in the secret
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Presence {
    #[default]
    Unknown,
    Present,
    Absent,
}

/// Everything learned about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFact {
    pub presence: Presence,
    /// Positions where the letter was marked Green
    pub correct_positions: PositionSet,
    /// Positions where the letter was marked present-but-misplaced
    pub wrong_positions: PositionSet,
    /// Cleared once a single guess proves the secret holds at most one copy
    pub duplicate_allowed: bool,
}

impl Default for LetterFact {
    fn default() -> Self {
        Self {
            presence: Presence::Unknown,
            correct_positions: PositionSet::new(),
            wrong_positions: PositionSet::new(),
            duplicate_allowed: true,
        }
    }
}

impl LetterFact {
    /// Move `Unknown` to `presence`; settled facts are never overwritten
    fn settle(&mut self, presence: Presence) {
        if self.presence == Presence::Unknown {
            self.presence = presence;
        }
    }
}

/// Per-game knowledge store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    facts: [LetterFact; ALPHABET_SIZE],
    skeleton: [Option<u8>; WORD_LENGTH],
    known_letters: LetterSet,
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// A state with no knowledge at all
    #[must_use]
    pub fn new() -> Self {
        Self {
            facts: [LetterFact::default(); ALPHABET_SIZE],
            skeleton: [None; WORD_LENGTH],
            known_letters: LetterSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn fact(&self, letter: u8) -> &LetterFact {
        &self.facts[letter_index(letter)]
    }

    #[inline]
    #[must_use]
    pub const fn presence(&self, letter: u8) -> Presence {
        self.fact(letter).presence
    }

    /// Confirmed letter per position, filled in as Greens arrive
    #[must_use]
    pub const fn skeleton(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.skeleton
    }

    /// Letters seen Green or Yellow at least once
    #[must_use]
    pub const fn known_letters(&self) -> LetterSet {
        self.known_letters
    }

    /// Skeleton rendered with `_` for unknown slots, e.g. `a__le`
    #[must_use]
    pub fn skeleton_pattern(&self) -> String {
        self.skeleton
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect()
    }

    /// Fold the feedback for `guess` into the state
    ///
    /// Positions are processed left to right. A letter repeated within the
    /// guess can only clear its duplicate flag, never mark the letter absent,
    /// and a Black on a letter that is hit elsewhere in the same guess is
    /// read as "no copy here" rather than "absent".
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::constraints::{ConstraintState, Presence};
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let mut state = ConstraintState::new();
    /// let guess = Word::new("plane").unwrap();
    /// state.apply(&guess, "yyybg".parse::<Feedback>().unwrap());
    ///
    /// assert_eq!(state.presence(b'n'), Presence::Absent);
    /// assert_eq!(state.presence(b'p'), Presence::Present);
    /// assert_eq!(state.skeleton_pattern(), "____e");
    /// ```
    pub fn apply(&mut self, guess: &Word, feedback: Feedback) {
        let mut seen = LetterSet::new();
        // letters whose earlier occurrence in this guess came back Black
        let mut missed = LetterSet::new();

        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            let repeated = seen.contains(letter);
            let hits = Self::hits_in_guess(guess, feedback, letter);
            let fact = &mut self.facts[letter_index(letter)];

            match mark {
                Mark::Green | Mark::Yellow => {
                    fact.settle(Presence::Present);
                    if mark == Mark::Green {
                        fact.correct_positions.insert(i);
                        self.skeleton[i].get_or_insert(letter);
                    } else {
                        fact.wrong_positions.insert(i);
                    }
                    self.known_letters.insert(letter);

                    if repeated && missed.contains(letter) && hits <= 1 {
                        fact.duplicate_allowed = false;
                    }
                }
                Mark::Black => {
                    if repeated {
                        if hits <= 1 {
                            fact.duplicate_allowed = false;
                        }
                        if hits > 0 {
                            fact.wrong_positions.insert(i);
                        }
                    } else if hits > 0 {
                        // a later copy in this guess is a hit
                        if hits == 1 {
                            fact.duplicate_allowed = false;
                        }
                        fact.wrong_positions.insert(i);
                    } else if fact.presence == Presence::Present {
                        fact.wrong_positions.insert(i);
                    } else {
                        fact.settle(Presence::Absent);
                    }
                    missed.insert(letter);
                }
            }

            seen.insert(letter);
        }
    }

    /// Number of Green/Yellow marks `letter` received in this guess
    fn hits_in_guess(guess: &Word, feedback: Feedback, letter: u8) -> usize {
        guess
            .positions_of(letter)
            .iter()
            .filter(|&&p| feedback.mark_at(p).is_hit())
            .count()
    }

    /// True when `self` holds at least everything `earlier` knew
    #[must_use]
    pub fn extends(&self, earlier: &Self) -> bool {
        let skeleton_kept = self
            .skeleton
            .iter()
            .zip(&earlier.skeleton)
            .all(|(now, before)| before.is_none() || now == before);

        let facts_kept = self.facts.iter().zip(&earlier.facts).all(|(now, before)| {
            now.correct_positions.is_superset(before.correct_positions)
                && now.wrong_positions.is_superset(before.wrong_positions)
                && (before.presence == Presence::Unknown || now.presence == before.presence)
                && (before.duplicate_allowed || !now.duplicate_allowed)
        });

        skeleton_kept && facts_kept && self.known_letters.is_superset(earlier.known_letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(code: &str) -> Feedback {
        code.parse().unwrap()
    }

    #[test]
    fn fresh_state_knows_nothing() {
        let state = ConstraintState::new();
        for letter in b'a'..=b'z' {
            let fact = state.fact(letter);
            assert_eq!(fact.presence, Presence::Unknown);
            assert!(fact.correct_positions.is_empty());
            assert!(fact.wrong_positions.is_empty());
            assert!(fact.duplicate_allowed);
        }
        assert_eq!(state.skeleton_pattern(), "_____");
        assert!(state.known_letters().is_empty());
    }

    #[test]
    fn green_fills_skeleton_and_known_letters() {
        let mut state = ConstraintState::new();
        state.apply(&word("apple"), feedback("ggggg"));

        assert_eq!(state.skeleton_pattern(), "apple");
        assert_eq!(state.known_letters().len(), 4);
        let p = state.fact(b'p');
        assert_eq!(p.correct_positions.iter().collect::<Vec<_>>(), vec![1, 2]);
        assert!(p.duplicate_allowed);
    }

    #[test]
    fn yellow_records_wrong_position() {
        let mut state = ConstraintState::new();
        state.apply(&word("plane"), feedback("yyybg"));

        let fact = state.fact(b'l');
        assert_eq!(fact.presence, Presence::Present);
        assert!(fact.wrong_positions.contains(1));
        assert!(fact.correct_positions.is_empty());
        assert!(state.known_letters().contains(b'l'));
        assert_eq!(state.presence(b'n'), Presence::Absent);
    }

    #[test]
    fn repeated_black_clears_duplicate_flag_only() {
        let mut state = ConstraintState::new();
        // z absent at both copies: first Black settles Absent, second only clears the flag
        state.apply(&word("zebuz"), feedback("bybbb"));

        let fact = state.fact(b'z');
        assert_eq!(fact.presence, Presence::Absent);
        assert!(!fact.duplicate_allowed);
        assert!(state.fact(b'e').duplicate_allowed);
    }

    #[test]
    fn hit_then_black_means_single_copy() {
        // strict-rule feedback: "speed" against "abide" marks only one e
        let mut state = ConstraintState::new();
        state.apply(&word("speed"), feedback("bbyby"));

        let fact = state.fact(b'e');
        assert_eq!(fact.presence, Presence::Present);
        assert!(!fact.duplicate_allowed);
        assert!(fact.wrong_positions.contains(2));
        assert!(fact.wrong_positions.contains(3));
    }

    #[test]
    fn black_then_hit_is_not_absent() {
        // strict-rule feedback: "geese" against "those" greys the first two e's
        let mut state = ConstraintState::new();
        state.apply(&word("geese"), feedback("bbbgg"));

        let fact = state.fact(b'e');
        assert_eq!(fact.presence, Presence::Present);
        assert!(!fact.duplicate_allowed);
        assert!(fact.correct_positions.contains(4));
        assert!(fact.wrong_positions.contains(1));
        assert!(fact.wrong_positions.contains(2));
        assert_eq!(state.presence(b'g'), Presence::Absent);
    }

    #[test]
    fn two_hits_keep_duplicates_allowed() {
        // "eerie" against "there" under strict rules: two e's hit, one missed
        let mut state = ConstraintState::new();
        state.apply(&word("eerie"), feedback("ybybg"));

        let fact = state.fact(b'e');
        assert_eq!(fact.presence, Presence::Present);
        assert!(fact.duplicate_allowed);
    }

    #[test]
    fn presence_never_reverts() {
        let mut state = ConstraintState::new();
        state.apply(&word("plane"), feedback("yyybg"));
        // contradictory follow-up leaves settled presence alone
        state.apply(&word("nasty"), feedback("gbbbb"));

        assert_eq!(state.presence(b'n'), Presence::Absent);
        assert_eq!(state.presence(b'a'), Presence::Present);
        assert_eq!(state.skeleton()[0], Some(b'n'));
    }

    #[test]
    fn knowledge_is_monotonic_across_guesses() {
        let secret = word("apple");
        let mut state = ConstraintState::new();

        for guess in ["crane", "plane", "ample", "apply", "apple"] {
            let before = state.clone();
            let guess = word(guess);
            state.apply(&guess, Feedback::validate(&secret, &guess));
            assert!(state.extends(&before), "knowledge shrank after {guess}");
        }
        assert_eq!(state.skeleton_pattern(), "apple");
    }

    #[test]
    fn extends_detects_lost_knowledge() {
        let mut later = ConstraintState::new();
        later.apply(&word("plane"), feedback("yyybg"));
        let fresh = ConstraintState::new();

        assert!(later.extends(&fresh));
        assert!(!fresh.extends(&later));
    }
}
