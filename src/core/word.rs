//! Word normalization and letter counting
//!
//! Every word that enters the game (root words, player input, dictionary entries)
//! goes through [`normalize`] so comparisons never depend on case or stray whitespace.

use rustc_hash::FxHashMap;
use std::fmt;

/// Normalize raw text into the form the game compares words in
///
/// Trims leading and trailing whitespace and uppercases the rest.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  tile\n"), "TILE");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Multiset of the letters available in a root word
///
/// Used for the anagram-subset test: a candidate is spellable when every one of its
/// letters can be taken from the pool, each occurrence consuming one copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from the letters of a word
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of copies of `letter` still in the pool
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Remove one copy of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) when no copy is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a copy, so the pool can be reused for further candidates.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("TELEVISION");
    /// assert!(pool.can_spell("TILE"));
    /// assert!(!pool.can_spell("VISIONS")); // needs a second S
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|ch| remaining.take(ch))
    }

    /// Total number of letters left
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether every letter has been taken
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, usize)> = self
            .counts
            .iter()
            .filter(|&(_, &n)| n > 0)
            .map(|(&ch, &n)| (ch, n))
            .collect();
        letters.sort_unstable();

        for (ch, n) in letters {
            for _ in 0..n {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
