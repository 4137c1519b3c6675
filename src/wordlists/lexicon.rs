//! Set-backed dictionary

use crate::core::normalize;
use crate::rules::{DEFAULT_LANGUAGE, DictionaryOracle};
use rustc_hash::FxHashSet;

/// A static set of recognized words in one language
///
/// Entries are normalized on the way in, so lookups are exact matches on uppercase
/// words. A word is recognized only when asked about the lexicon's own language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: FxHashSet<String>,
    language: String,
}

impl Lexicon {
    /// Build an English lexicon
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::with_language(words, DEFAULT_LANGUAGE)
    }

    /// Build a lexicon for the given language
    pub fn with_language<I, W>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
            language: language.into(),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl DictionaryOracle for Lexicon {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language == self.language && self.contains(word)
    }
}
