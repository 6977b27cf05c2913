//! Batch self-play
//!
//! Draws secrets at random from the corpus and lets the solver play each one.
//! Games run in parallel; each owns its own session state.

use crate::core::Word;
use crate::corpus::Corpus;
use crate::solver::{GameSession, MAX_ATTEMPTS, SessionError, SessionState, TieredScorer};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub games: usize,
    /// Seed for reproducible secret draws
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }
}

/// Outcome of a single simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub secret: String,
    pub outcome: SessionState,
    pub attempts: usize,
}

/// Aggregate statistics of a simulation run
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    pub played: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub no_solution: usize,
    /// `distribution[n - 1]` games solved in `n` attempts
    pub distribution: [usize; MAX_ATTEMPTS],
    pub duration: Duration,
}

impl SimulationStats {
    /// Tally game records
    #[must_use]
    pub fn from_records(records: &[GameRecord], duration: Duration) -> Self {
        let mut stats = Self {
            played: records.len(),
            duration,
            ..Self::default()
        };

        for record in records {
            match record.outcome {
                SessionState::Solved => {
                    stats.solved += 1;
                    if let Some(slot) = record
                        .attempts
                        .checked_sub(1)
                        .and_then(|i| stats.distribution.get_mut(i))
                    {
                        *slot += 1;
                    }
                }
                SessionState::Exhausted => stats.exhausted += 1,
                SessionState::NoSolution => stats.no_solution += 1,
                SessionState::Attempt(_) => {}
            }
        }

        stats
    }

    /// Mean attempts over solved games, `None` when nothing was solved
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use wordle_assist::commands::SimulationStats;
    ///
    /// let stats = SimulationStats::from_records(&[], Duration::ZERO);
    /// assert_eq!(stats.average_attempts(), None);
    /// ```
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        if self.solved == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / self.solved as f64)
    }

    /// Share of games solved, in percent
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        (self.played > 0).then(|| self.solved as f64 / self.played as f64 * 100.0)
    }
}

/// Draw `count` secrets up front so the parallel phase is deterministic
fn draw_secrets(corpus: &Corpus, count: usize, seed: Option<u64>) -> Vec<&Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count).map(|_| corpus.random_secret(&mut rng)).collect()
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Play one game against `secret` from a fresh session
fn play_one(
    corpus: &Corpus,
    secret: &Word,
    scorer: TieredScorer,
) -> Result<GameRecord, SessionError> {
    let mut session = GameSession::new(corpus.words(), scorer)?;
    let outcome = session.play_against(secret)?;

    Ok(GameRecord {
        secret: secret.text().to_string(),
        outcome,
        attempts: session.attempts(),
    })
}

/// Run `config.games` games against random secrets
///
/// # Errors
///
/// Returns an error if a session cannot produce a guess.
pub fn run_simulation(
    corpus: &Corpus,
    config: SimulationConfig,
    scorer: TieredScorer,
) -> Result<(SimulationStats, Vec<GameRecord>), SessionError> {
    let secrets = draw_secrets(corpus, config.games, config.seed);
    let pb = progress_bar(secrets.len(), config.show_progress);
    let start = Instant::now();

    let records = secrets
        .par_iter()
        .map(|secret| {
            let record = play_one(corpus, secret, scorer);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let stats = SimulationStats::from_records(&records, start.elapsed());
    Ok((stats, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_slice(&[
            "apple", "apply", "ample", "angle", "plane", "plate", "crane", "eagle", "maple",
            "pearl", "lapse", "sleep", "mango", "tango", "cargo", "bingo", "pinto", "lingo",
        ])
        .unwrap()
    }

    fn record(outcome: SessionState, attempts: usize) -> GameRecord {
        GameRecord {
            secret: "apple".to_string(),
            outcome,
            attempts,
        }
    }

    #[test]
    fn simulation_runs() {
        let config = SimulationConfig::new(20).with_seed(42).quiet();
        let (stats, records) = run_simulation(&corpus(), config, TieredScorer::default()).unwrap();

        assert_eq!(stats.played, 20);
        assert_eq!(records.len(), 20);
        assert_eq!(stats.solved + stats.exhausted + stats.no_solution, 20);
        assert_eq!(stats.no_solution, 0);
        let attempts = 1..=MAX_ATTEMPTS;
        assert!(records.iter().all(|r| attempts.contains(&r.attempts)));
    }

    #[test]
    fn distribution_sums_to_solved() {
        let config = SimulationConfig::new(30).with_seed(1).quiet();
        let (stats, _) = run_simulation(&corpus(), config, TieredScorer::default()).unwrap();

        assert_eq!(stats.distribution.iter().sum::<usize>(), stats.solved);
        if let Some(average) = stats.average_attempts() {
            assert!((1.0..=MAX_ATTEMPTS as f64).contains(&average));
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let corpus = corpus();
        let config = SimulationConfig::new(10).with_seed(7).quiet();

        let (_, first) = run_simulation(&corpus, config, TieredScorer::default()).unwrap();
        let (_, second) = run_simulation(&corpus, config, TieredScorer::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_games_has_no_average() {
        let config = SimulationConfig::new(0).quiet();
        let (stats, records) = run_simulation(&corpus(), config, TieredScorer::default()).unwrap();

        assert!(records.is_empty());
        assert_eq!(stats.average_attempts(), None);
        assert_eq!(stats.win_rate(), None);
    }

    #[test]
    fn stats_tally_outcomes() {
        let records = [
            record(SessionState::Solved, 2),
            record(SessionState::Solved, 4),
            record(SessionState::Solved, 4),
            record(SessionState::Exhausted, 6),
            record(SessionState::NoSolution, 3),
        ];
        let stats = SimulationStats::from_records(&records, Duration::ZERO);

        assert_eq!(stats.played, 5);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.exhausted, 1);
        assert_eq!(stats.no_solution, 1);
        assert_eq!(stats.distribution, [0, 1, 0, 2, 0, 0]);
        assert_eq!(stats.average_attempts(), Some(10.0 / 3.0));
        assert_eq!(stats.win_rate(), Some(60.0));
    }

    #[test]
    fn only_failures_has_no_average() {
        let records = [record(SessionState::Exhausted, 6)];
        let stats = SimulationStats::from_records(&records, Duration::ZERO);

        assert_eq!(stats.average_attempts(), None);
        assert_eq!(stats.win_rate(), Some(0.0));
    }
}
