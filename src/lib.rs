//! Wordle Assist
//!
//! A five-letter word puzzle assistant. Feedback from each guess is folded
//! into a per-game [`constraints::ConstraintState`], the candidate list is
//! filtered against it, and a tiered letter-frequency heuristic picks the
//! next guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::corpus::Corpus;
//! use wordle_assist::core::Word;
//! use wordle_assist::solver::{GameSession, SessionState, TieredScorer};
//!
//! let corpus = Corpus::from_slice(&["crane", "slate", "irate", "plate"]).unwrap();
//! let secret = Word::new("plate").unwrap();
//!
//! let mut session = GameSession::new(corpus.words(), TieredScorer::default()).unwrap();
//! assert_eq!(session.play_against(&secret).unwrap(), SessionState::Solved);
//! ```

// Words and feedback
pub mod core;

// Accumulated knowledge and candidate filtering
pub mod constraints;

// Guess selection and game sessions
pub mod solver;

// Word list loading
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
