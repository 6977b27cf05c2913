//! Core domain types for the word game
//!
//! Words and feedback codes. Everything here is pure and has no game state.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LENGTH, Word, WordError};
