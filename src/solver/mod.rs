//! Guess selection and game orchestration
//!
//! The `GuessSelector` trait is the seam between a game and the heuristic
//! that drives it; `TieredScorer` is the production heuristic.

mod scorer;
mod session;
mod strategy;

pub use scorer::{Tier, TierThresholds, TieredScorer, probe_letters};
pub use session::{GameSession, MAX_ATTEMPTS, SessionError, SessionState, Turn};
pub use strategy::{FirstCandidate, GuessSelector};
