//! Word solving command
//!
//! Plays one game against a known secret and returns the solution path.

use crate::core::{Feedback, Word};
use crate::corpus::Corpus;
use crate::solver::{GameSession, SessionState, Tier, TieredScorer};
use anyhow::{Context, Result, bail};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: String,
    pub outcome: SessionState,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == SessionState::Solved
    }
}

/// A single guess in the solution path
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    /// `None` when the lone remaining candidate was played directly
    pub tier: Option<Tier>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `secret` with the given scorer
///
/// # Errors
///
/// Returns an error if the secret is not a valid word or is missing from the
/// corpus.
pub fn solve_word(corpus: &Corpus, secret: &str, scorer: TieredScorer) -> Result<SolveResult> {
    let secret_word = Word::new(secret).with_context(|| format!("invalid secret word {secret:?}"))?;
    if !corpus.contains(&secret_word) {
        bail!("{secret_word} is not in the word list");
    }

    let mut session = GameSession::new(corpus.words(), scorer)?;
    let mut tiers = Vec::new();

    while !session.state().is_terminal() {
        let tier = (session.candidates().len() > 1)
            .then(|| scorer.tier(session.candidates(), session.constraints()));
        let guess = session.suggest()?;
        session.submit(Feedback::validate(&secret_word, guess))?;
        tiers.push(tier);
    }

    let steps = session
        .history()
        .iter()
        .zip(tiers)
        .map(|(turn, tier)| GuessStep {
            word: turn.guess.text().to_string(),
            feedback: turn.feedback,
            tier,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
        })
        .collect();

    Ok(SolveResult {
        secret: secret_word.text().to_string(),
        outcome: session.state(),
        steps,
    })
}
