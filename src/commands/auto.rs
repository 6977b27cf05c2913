//! Line protocol for automation drivers
//!
//! A driver (a browser bot, a test harness) reads suggestions from stdout and
//! answers with one line per turn on stdin:
//!
//! ```text
//! -> WORD:<guess>
//! <- feedback (e.g. "gybbg"), "ggggg" when solved, or "SKIP"
//! -> UPDATED:<remaining candidates>
//! -> WORD:<next guess>
//! ...
//! -> SOLVED:<word>:<attempts> | FAILED:<attempts> | ERROR:<reason>
//! ```
//!
//! Malformed lines get an `ERROR:` reply and the protocol waits for another line.

use crate::core::Feedback;
use crate::corpus::Corpus;
use crate::solver::{GameSession, SessionState, TieredScorer};
use anyhow::Result;
use std::io::{BufRead, Write};

const NO_CANDIDATES: &str = "ERROR:no candidates remain";

/// Run one game over the line protocol and return how it ended
///
/// Ending the input early returns the state at that point.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_auto<R: BufRead, W: Write>(
    corpus: &Corpus,
    scorer: TieredScorer,
    input: R,
    output: &mut W,
) -> Result<SessionState> {
    let mut session = GameSession::new(corpus.words(), scorer)?;
    writeln!(output, "WORD:{}", session.suggest()?)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let reply = line.trim();
        if reply.is_empty() {
            continue;
        }

        if reply.eq_ignore_ascii_case("skip") {
            session.skip()?;
            if session.state() == SessionState::NoSolution {
                writeln!(output, "{NO_CANDIDATES}")?;
                return Ok(session.state());
            }
            writeln!(output, "WORD:{}", session.suggest()?)?;
            output.flush()?;
            continue;
        }

        let feedback = match reply.parse::<Feedback>() {
            Ok(feedback) => feedback,
            Err(e) => {
                writeln!(output, "ERROR:{e}")?;
                output.flush()?;
                continue;
            }
        };

        let guess = session.suggest()?;
        match session.submit(feedback)? {
            SessionState::Solved => {
                writeln!(output, "SOLVED:{guess}:{}", session.attempts())?;
            }
            SessionState::Exhausted => {
                writeln!(output, "FAILED:{}", session.attempts())?;
            }
            SessionState::NoSolution => {
                writeln!(output, "{NO_CANDIDATES}")?;
            }
            SessionState::Attempt(_) => {
                writeln!(output, "UPDATED:{}", session.candidates().len())?;
                writeln!(output, "WORD:{}", session.suggest()?)?;
                output.flush()?;
                continue;
            }
        }
        output.flush()?;
        return Ok(session.state());
    }

    Ok(session.state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn corpus() -> Corpus {
        Corpus::from_slice(&["apple", "apply", "ample", "angle", "mango", "tango"]).unwrap()
    }

    fn run(corpus: &Corpus, script: &str) -> (SessionState, Vec<String>) {
        let mut output = Vec::new();
        let scorer = TieredScorer::default();
        let state = run_auto(corpus, scorer, script.as_bytes(), &mut output).unwrap();
        let lines = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (state, lines)
    }

    #[test]
    fn solved_immediately() {
        let (state, lines) = run(&corpus(), "ggggg\n");

        assert_eq!(state, SessionState::Solved);
        assert_eq!(lines.len(), 2);
        let word = lines[0].strip_prefix("WORD:").unwrap();
        assert_eq!(lines[1], format!("SOLVED:{word}:1"));
    }

    #[test]
    fn feedback_updates_then_suggests() {
        let corpus = corpus();
        let secret = Word::new("tango").unwrap();

        let (_, first) = run(&corpus, "");
        let guess = Word::new(first[0].strip_prefix("WORD:").unwrap()).unwrap();
        let feedback = Feedback::validate(&secret, &guess);

        let (state, lines) = run(&corpus, &format!("{feedback}\nggggg\n"));
        assert_eq!(state, SessionState::Solved);
        assert!(lines[1].starts_with("UPDATED:"));
        assert!(lines[2].starts_with("WORD:"));
        assert_eq!(lines[3], format!("SOLVED:{}:2", &lines[2][5..]));
    }

    #[test]
    fn skip_offers_another_word() {
        let (state, lines) = run(&corpus(), "SKIP\nskip\n");

        assert_eq!(state, SessionState::Attempt(1));
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.starts_with("WORD:")));
        assert_ne!(lines[0], lines[1]);
        assert_ne!(lines[1], lines[2]);
    }

    #[test]
    fn malformed_input_is_reported_and_ignored() {
        let (state, lines) = run(&corpus(), "gyb\nhello\n\nggggg\n");

        assert_eq!(state, SessionState::Solved);
        assert!(lines[1].starts_with("ERROR:"));
        assert!(lines[2].starts_with("ERROR:"));
        assert!(lines[3].starts_with("SOLVED:"));
        assert!(lines[3].ends_with(":1"));
    }

    #[test]
    fn contradictory_feedback_ends_with_error() {
        let (state, lines) = run(&corpus(), "bbbbb\n");

        assert_eq!(state, SessionState::NoSolution);
        assert_eq!(lines.last().map(String::as_str), Some(NO_CANDIDATES));
    }

    #[test]
    fn skipping_every_word_ends_with_error() {
        let corpus = Corpus::from_slice(&["apple"]).unwrap();
        let (state, lines) = run(&corpus, "skip\n");

        assert_eq!(state, SessionState::NoSolution);
        assert_eq!(lines, ["WORD:apple", NO_CANDIDATES]);
    }

    #[test]
    fn six_misses_fail() {
        // words differ only in the first letter; each miss removes one of them
        let corpus = Corpus::from_slice(&[
            "aingo", "bingo", "cingo", "dingo", "fingo", "hingo", "kingo",
        ])
        .unwrap();
        let (state, lines) = run(&corpus, &"bgggg\n".repeat(6));

        assert_eq!(state, SessionState::Exhausted);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[10], "WORD:hingo");
        assert_eq!(lines.last().map(String::as_str), Some("FAILED:6"));
    }
}
