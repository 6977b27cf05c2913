//! Constraint tracking for a single game
//!
//! `ConstraintState` accumulates what feedback has revealed about the secret,
//! and the filter keeps only the words that agree with it.

mod filter;
mod letters;
mod state;

pub use filter::filter_candidates;
pub use letters::{ALPHABET_SIZE, LetterSet, PositionSet, letter_index};
pub use state::{ConstraintState, LetterFact, Presence};
