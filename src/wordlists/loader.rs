//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every entry is normalized; blank lines and entries with non-alphabetic
//! characters are skipped.

use crate::core::normalize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        warn!(path = %path.display(), "word list contains no usable words");
    } else {
        debug!(path = %path.display(), count = words.len(), "loaded word list");
    }

    Ok(words)
}

/// Convert embedded string slice to a normalized word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines.map(normalize).filter(|word| is_word(word)).collect()
}

/// Non-empty and purely alphabetic
fn is_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}
