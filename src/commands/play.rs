//! Interactive assistant mode
//!
//! Suggests a guess, reads the feedback the user got from the real game and
//! narrows the candidates until the word is found. Words rejected with `skip`
//! stay out of every later game of the same run.

use crate::core::Feedback;
use crate::corpus::Corpus;
use crate::output::render_guess;
use crate::solver::{GameSession, MAX_ATTEMPTS, SessionState, TieredScorer};
use anyhow::Result;
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// What the user typed in answer to a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Skip,
    Feedback(Feedback),
}

fn parse_reply(input: &str) -> Result<Reply, String> {
    if input.eq_ignore_ascii_case("skip") {
        return Ok(Reply::Skip);
    }
    input
        .parse::<Feedback>()
        .map(Reply::Feedback)
        .map_err(|e| e.to_string())
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;
    read_line(input)
}

fn solved_message(attempts: usize) -> String {
    let noun = if attempts == 1 { "guess" } else { "guesses" };
    format!("Solved in {attempts} {noun}!")
}

/// Run interactive games until the user declines another or input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    corpus: &Corpus,
    scorer: TieredScorer,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", "Wordle assistant".bright_cyan().bold())?;
    writeln!(
        output,
        "Enter feedback as five letters: g = green, y = yellow, b = grey."
    )?;
    writeln!(
        output,
        "Type 'skip' if the game rejects the word, 'ggggg' once it is solved.\n"
    )?;

    let mut rejected: FxHashSet<String> = FxHashSet::default();

    loop {
        let pool = corpus
            .iter()
            .filter(|word| !rejected.contains(word.text()))
            .collect();
        let Ok(mut session) = GameSession::from_pool(pool, scorer) else {
            writeln!(output, "{}", "Every word has been skipped.".red())?;
            return Ok(());
        };

        while let SessionState::Attempt(attempt) = session.state() {
            let guess = session.suggest()?;
            writeln!(
                output,
                "Attempt {attempt}/{MAX_ATTEMPTS}: {} ({} candidates)",
                guess.text().to_uppercase().bold(),
                session.candidates().len()
            )?;

            let Some(line) = prompt(input, output, "Feedback")? else {
                return Ok(());
            };

            match parse_reply(&line) {
                Ok(Reply::Skip) => {
                    let word = session.skip()?;
                    rejected.insert(word.text().to_string());
                    writeln!(output, "Skipped {}", word.text().to_uppercase())?;
                }
                Ok(Reply::Feedback(feedback)) => {
                    session.submit(feedback)?;
                    writeln!(output, "{}", render_guess(guess, &feedback))?;
                }
                Err(reason) => writeln!(output, "{} {reason}", "Invalid feedback:".red())?,
            }
        }

        match session.state() {
            SessionState::Solved => writeln!(
                output,
                "{}",
                solved_message(session.attempts()).green().bold()
            )?,
            SessionState::Exhausted => writeln!(
                output,
                "{}",
                format!("Out of attempts after {MAX_ATTEMPTS} guesses.").yellow()
            )?,
            SessionState::NoSolution => writeln!(
                output,
                "{}",
                "No candidates remain; check the feedback entered.".red()
            )?,
            SessionState::Attempt(_) => {}
        }

        let Some(answer) = prompt(input, output, "Play again? (y/n)")? else {
            return Ok(());
        };
        if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
            return Ok(());
        }
        writeln!(output)?;
    }
}
