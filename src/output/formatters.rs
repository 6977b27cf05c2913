//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// One letter on a background tile matching its mark
#[must_use]
pub fn letter_tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Green => text.black().on_green().bold(),
        Mark::Yellow => text.black().on_yellow().bold(),
        Mark::Black => text.white().on_black().bold(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn render_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| letter_tile(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Average attempts, or "no data" when there is nothing to average
#[must_use]
pub fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "no data".to_string(), |avg| format!("{avg:.3}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let feedback: Feedback = "gybbg".parse().unwrap();

        assert_eq!(render_guess(&guess, &feedback), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn average_formatting() {
        assert_eq!(format_average(None), "no data");
        assert_eq!(format_average(Some(3.5)), "3.500");
    }
}
