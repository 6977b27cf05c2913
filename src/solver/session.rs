//! One game from first guess to a terminal state
//!
//! A session owns its `ConstraintState` and candidate list exclusively; the
//! corpus is only borrowed. Sessions never share state, so any number of
//! them may run side by side.

use super::scorer::TieredScorer;
use super::strategy::GuessSelector;
use crate::constraints::{ConstraintState, filter_candidates};
use crate::core::{Feedback, Word};
use thiserror::Error;

/// Attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting on feedback for attempt `n` (1-based)
    Attempt(usize),
    /// All-green feedback received
    Solved,
    /// Six attempts used without solving
    Exhausted,
    /// Feedback left no candidate standing
    NoSolution,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Attempt(_))
    }
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot start a game with an empty corpus")]
    EmptyCorpus,
    #[error("the game is already over ({0:?})")]
    Finished(SessionState),
    #[error("no words left to suggest")]
    NoGuess,
}

/// One completed attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn<'a> {
    pub guess: &'a Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A single game
pub struct GameSession<'a, S: GuessSelector = TieredScorer> {
    selector: S,
    pool: Vec<&'a Word>,
    candidates: Vec<&'a Word>,
    constraints: ConstraintState,
    state: SessionState,
    history: Vec<Turn<'a>>,
    suggestion: Option<&'a Word>,
}

impl<'a, S: GuessSelector> GameSession<'a, S> {
    /// Start a game over `corpus`, which serves as both guess pool and initial candidates
    ///
    /// # Errors
    /// Returns `SessionError::EmptyCorpus` if `corpus` is empty.
    pub fn new(corpus: &'a [Word], selector: S) -> Result<Self, SessionError> {
        Self::from_pool(corpus.iter().collect(), selector)
    }

    /// Start a game over an explicit list of word references
    ///
    /// # Errors
    /// Returns `SessionError::EmptyCorpus` if `pool` is empty.
    pub fn from_pool(pool: Vec<&'a Word>, selector: S) -> Result<Self, SessionError> {
        if pool.is_empty() {
            return Err(SessionError::EmptyCorpus);
        }

        Ok(Self {
            selector,
            candidates: pool.clone(),
            pool,
            constraints: ConstraintState::new(),
            state: SessionState::Attempt(1),
            history: Vec::new(),
            suggestion: None,
        })
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    #[must_use]
    pub fn history(&self) -> &[Turn<'a>] {
        &self.history
    }

    /// Attempts made so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    fn current_attempt(&self) -> Result<usize, SessionError> {
        match self.state {
            SessionState::Attempt(n) => Ok(n),
            terminal => Err(SessionError::Finished(terminal)),
        }
    }

    /// The guess for the current attempt
    ///
    /// The suggestion is computed once and kept until feedback arrives or it
    /// is skipped. A lone surviving candidate is suggested directly.
    ///
    /// # Errors
    /// Returns `SessionError::Finished` after a terminal state, or
    /// `SessionError::NoGuess` when every word has been skipped.
    pub fn suggest(&mut self) -> Result<&'a Word, SessionError> {
        self.current_attempt()?;

        if let Some(word) = self.suggestion {
            return Ok(word);
        }

        let picked = if let [only] = self.candidates[..] {
            Some(only)
        } else {
            self.selector
                .select_guess(&self.candidates, &self.pool, &self.constraints)
        };
        let word = picked.ok_or(SessionError::NoGuess)?;

        self.suggestion = Some(word);
        Ok(word)
    }

    /// Reject the current suggestion and drop it from this game's word lists
    ///
    /// Returns the rejected word. If the candidate list empties as a result the
    /// session ends in `NoSolution`.
    ///
    /// # Errors
    /// Same as [`GameSession::suggest`].
    pub fn skip(&mut self) -> Result<&'a Word, SessionError> {
        let rejected = self.suggest()?;
        self.suggestion = None;
        self.pool.retain(|word| *word != rejected);
        self.candidates.retain(|word| *word != rejected);

        if self.candidates.is_empty() {
            self.state = SessionState::NoSolution;
        }
        Ok(rejected)
    }

    /// Record feedback for the current suggestion and advance the game
    ///
    /// # Errors
    /// Same as [`GameSession::suggest`].
    pub fn submit(&mut self, feedback: Feedback) -> Result<SessionState, SessionError> {
        let attempt = self.current_attempt()?;
        let guess = self.suggest()?;
        self.suggestion = None;

        let candidates_before = self.candidates.len();

        if feedback.is_solved() {
            self.history.push(Turn {
                guess,
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            self.state = SessionState::Solved;
            return Ok(self.state);
        }

        self.constraints.apply(guess, feedback);
        self.candidates = filter_candidates(&self.candidates, &self.constraints);
        self.history.push(Turn {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        self.state = if self.candidates.is_empty() {
            SessionState::NoSolution
        } else if attempt >= MAX_ATTEMPTS {
            SessionState::Exhausted
        } else {
            SessionState::Attempt(attempt + 1)
        };
        Ok(self.state)
    }

    /// Play the game to the end against a known secret
    ///
    /// # Errors
    /// Same as [`GameSession::suggest`].
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::solver::{GameSession, SessionState, TieredScorer};
    ///
    /// let corpus: Vec<Word> = ["apple", "apply", "ample", "angle"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let mut session = GameSession::new(&corpus, TieredScorer::default()).unwrap();
    /// let outcome = session.play_against(&corpus[2]).unwrap();
    /// assert_eq!(outcome, SessionState::Solved);
    /// ```
    pub fn play_against(&mut self, secret: &Word) -> Result<SessionState, SessionError> {
        while !self.state.is_terminal() {
            let guess = self.suggest()?;
            self.submit(Feedback::validate(secret, guess))?;
        }
        Ok(self.state)
    }
}
