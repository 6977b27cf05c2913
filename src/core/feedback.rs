//! Per-letter feedback for a guess
//!
//! Feedback is written as five symbols over `{g, y, b}`:
//! - `g` = Green (letter in the correct position)
//! - `y` = Yellow (letter present elsewhere in the secret)
//! - `b` = Black (letter absent)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The mark given to a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Green,
    Yellow,
    Black,
}

impl Mark {
    /// Parse a single feedback symbol (case-insensitive)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' => Some(Self::Green),
            'y' | 'Y' => Some(Self::Yellow),
            'b' | 'B' => Some(Self::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Black => 'b',
        }
    }

    /// Green or Yellow: the letter is in the secret
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must be exactly {len} characters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}', use only g, y or b")]
    InvalidSymbol(char),
}

/// Feedback code for one guess: one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Green; WORD_LENGTH]);

    /// Compare `guess` against `secret`, position by position
    ///
    /// Green when the letters match, Yellow when the secret contains the
    /// guessed letter anywhere, Black otherwise. Repeated letters are not
    /// counted against the secret's letter multiset.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let guess = Word::new("plane").unwrap();
    /// assert_eq!(Feedback::validate(&secret, &guess).to_string(), "yyybg");
    /// ```
    #[must_use]
    pub fn validate(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Black; WORD_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *mark = if letter == secret.char_at(i) {
                Mark::Green
            } else if secret.has_letter(letter) {
                Mark::Yellow
            } else {
                Mark::Black
            };
        }

        Self(marks)
    }

    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Emoji rendering, e.g. "🟨🟨🟨⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Green => '🟩',
                Mark::Yellow => '🟨',
                Mark::Black => '⬛',
            })
            .collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    /// Parse feedback like "gybbg" (case-insensitive, surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let count = trimmed.chars().count();
        if count != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(count));
        }

        let mut marks = [Mark::Black; WORD_LENGTH];
        for (mark, symbol) in marks.iter_mut().zip(trimmed.chars()) {
            *mark = Mark::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }

        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}
