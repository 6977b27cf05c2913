//! Corpus loading
//!
//! Reads newline-delimited word files. Blank lines and entries that are not
//! five ASCII letters are skipped; an empty result is an error.

use super::Corpus;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for corpus loading
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no valid five-letter words")]
    Empty,
}

/// Load a corpus from a file
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or
/// `CorpusError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_assist::corpus::load_corpus;
///
/// let corpus = load_corpus("words/all_valid_words.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Corpus::new(parse_words(&content))
}

/// Parse one word per line, dropping blanks and invalid entries
fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_assist::corpus::words_from_slice;
///
/// let words = words_from_slice(&["crane", "abc", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_assist_{}_{name}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_trims_and_skips_blank_lines() {
        let words = parse_words("crane\n\n  slate \r\nab1de\nIRATE\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn load_corpus_reads_file() {
        let path = temp_file("ok", "apple\napply\nample\n");
        let corpus = load_corpus(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.words()[2].text(), "ample");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("wordle_assist_missing.txt");
        let err = load_corpus(&path).unwrap_err();

        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("wordle_assist_missing.txt"));
    }

    #[test]
    fn file_without_words_is_empty_error() {
        let path = temp_file("empty", "\n  \nabc\n");
        let err = load_corpus(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, CorpusError::Empty));
    }
}
