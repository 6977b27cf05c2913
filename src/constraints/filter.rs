//! Candidate filtering against accumulated constraints

use super::ConstraintState;
use super::state::Presence;
use crate::core::Word;

impl ConstraintState {
    /// Whether `word` is consistent with everything known so far
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let known = self.known_letters();
        if !known.iter().all(|letter| word.has_letter(letter)) {
            return false;
        }

        for (i, &letter) in word.chars().iter().enumerate() {
            if let Some(confirmed) = self.skeleton()[i]
                && confirmed != letter
            {
                return false;
            }

            let fact = self.fact(letter);

            if fact.presence == Presence::Absent {
                return false;
            }

            if !fact.correct_positions.is_empty() && !fact.correct_positions.contains(i) {
                let holds_correct_slot = fact
                    .correct_positions
                    .iter()
                    .any(|p| word.char_at(p) == letter);
                if !holds_correct_slot || !fact.duplicate_allowed {
                    return false;
                }
            }

            if fact.wrong_positions.contains(i) {
                return false;
            }

            if !fact.duplicate_allowed && word.count_of(letter) > 1 {
                return false;
            }
        }

        true
    }
}

/// Keep the words consistent with `state`, preserving order
///
/// # Examples
/// ```
/// use wordle_assist::constraints::{ConstraintState, filter_candidates};
/// use wordle_assist::core::{Feedback, Word};
///
/// let words: Vec<Word> = ["apple", "apply", "ample", "angle"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let mut state = ConstraintState::new();
/// state.apply(&words[0], Feedback::SOLVED);
///
/// let kept = filter_candidates(&refs, &state);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].text(), "apple");
/// ```
#[must_use]
pub fn filter_candidates<'a>(words: &[&'a Word], state: &ConstraintState) -> Vec<&'a Word> {
    words
        .iter()
        .copied()
        .filter(|word| state.admits(word))
        .collect()
}
