//! Candidate word validation
//!
//! The validator is a pure decision function over its inputs. It never mutates the
//! session; the caller decides what to do with the [`Verdict`].

use super::oracle::DictionaryOracle;
use super::rejection::{Rejection, Verdict};
use crate::core::LetterPool;
use tracing::debug;

/// Language passed to the dictionary when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Rule evaluator for candidate words
///
/// Holds the dictionary used for the "is it a real word" rule and the language to
/// ask it about. All other inputs are passed to [`WordValidator::evaluate`].
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    oracle: D,
    language: String,
}

impl<D: DictionaryOracle> WordValidator<D> {
    /// Create a validator checking words in [`DEFAULT_LANGUAGE`]
    pub fn new(oracle: D) -> Self {
        Self::with_language(oracle, DEFAULT_LANGUAGE)
    }

    /// Create a validator checking words in the given language
    pub fn with_language(oracle: D, language: impl Into<String>) -> Self {
        Self {
            oracle,
            language: language.into(),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn oracle(&self) -> &D {
        &self.oracle
    }

    /// Evaluate a normalized candidate against the game rules
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// too short, is the root word, already used, not a real word, not spellable.
    ///
    /// `candidate` and `root_word` must already be normalized; `used_words` holds the
    /// normalized words accepted so far.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::rules::{DictionaryOracle, Rejection, Verdict, WordValidator};
    ///
    /// struct Everything;
    /// impl DictionaryOracle for Everything {
    ///     fn is_recognized(&self, _word: &str, _language: &str) -> bool {
    ///         true
    ///     }
    /// }
    ///
    /// let validator = WordValidator::new(Everything);
    /// assert_eq!(validator.evaluate("TILE", "TELEVISION", &[], 4), Verdict::Accepted);
    /// assert_eq!(
    ///     validator.evaluate("SIT", "TELEVISION", &[], 4),
    ///     Verdict::Rejected(Rejection::TooShort)
    /// );
    /// ```
    pub fn evaluate(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: &[String],
        minimum_length: usize,
    ) -> Verdict {
        let verdict = match self.check(candidate, root_word, used_words, minimum_length) {
            Ok(()) => Verdict::Accepted,
            Err(reason) => Verdict::Rejected(reason),
        };
        debug!(candidate, root_word, ?verdict, "evaluated candidate");
        verdict
    }

    fn check(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: &[String],
        minimum_length: usize,
    ) -> Result<(), Rejection> {
        if !is_long_enough(candidate, minimum_length) {
            return Err(Rejection::TooShort);
        }
        if candidate == root_word {
            return Err(Rejection::IsRootWord);
        }
        if !is_original(candidate, used_words) {
            return Err(Rejection::NotOriginal);
        }
        if !self.oracle.is_recognized(candidate, &self.language) {
            return Err(Rejection::NotReal);
        }
        if !is_possible(candidate, root_word) {
            return Err(Rejection::NotPossible);
        }
        Ok(())
    }
}

/// Length rule, counted in characters
#[inline]
#[must_use]
pub fn is_long_enough(candidate: &str, minimum_length: usize) -> bool {
    candidate.chars().count() >= minimum_length
}

/// Originality rule
#[inline]
#[must_use]
pub fn is_original(candidate: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == candidate)
}

/// Anagram-subset rule: every letter of `candidate` taken from `root_word`, one copy each
#[must_use]
pub fn is_possible(candidate: &str, root_word: &str) -> bool {
    LetterPool::new(root_word).can_spell(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Recognizes a fixed set of words, in English only
    struct FakeDictionary {
        words: Vec<&'static str>,
        lookups: Cell<usize>,
    }

    impl FakeDictionary {
        fn new(words: &[&'static str]) -> Self {
            Self {
                words: words.to_vec(),
                lookups: Cell::new(0),
            }
        }
    }

    impl DictionaryOracle for FakeDictionary {
        fn is_recognized(&self, word: &str, language: &str) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            language == "en" && self.words.contains(&word)
        }
    }

    fn validator() -> WordValidator<FakeDictionary> {
        WordValidator::new(FakeDictionary::new(&[
            "TILE",
            "LION",
            "VISION",
            "ELITE",
            "SIT",
            "TELEVISION",
            "STONE",
            "TREE",
            "TEETER",
            "RATTLE",
            "RETELL",
            "LETTER",
        ]))
    }

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn accepts_valid_word() {
        let v = validator();
        assert_eq!(v.evaluate("TILE", "TELEVISION", &[], 4), Verdict::Accepted);
        assert_eq!(
            v.evaluate("VISION", "TELEVISION", &[], 4),
            Verdict::Accepted
        );
        assert_eq!(v.evaluate("STONE", "TELEVISION", &[], 4), Verdict::Accepted);
    }

    #[test]
    fn too_short_wins_over_everything() {
        let v = validator();
        // unknown, unspellable and too short
        assert_eq!(
            v.evaluate("XYZ", "TELEVISION", &[], 4),
            Verdict::Rejected(Rejection::TooShort)
        );
        // real and spellable but too short
        assert_eq!(
            v.evaluate("SIT", "TELEVISION", &[], 4),
            Verdict::Rejected(Rejection::TooShort)
        );
        // root word itself, but the minimum is longer than it
        assert_eq!(
            v.evaluate("TELEVISION", "TELEVISION", &[], 11),
            Verdict::Rejected(Rejection::TooShort)
        );
        // already used and too short
        assert_eq!(
            v.evaluate("LION", "TELEVISION", &used(&["LION"]), 5),
            Verdict::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn minimum_length_is_inclusive() {
        let v = validator();
        assert_eq!(v.evaluate("LION", "TELEVISION", &[], 4), Verdict::Accepted);
        assert_eq!(
            v.evaluate("LION", "TELEVISION", &[], 5),
            Verdict::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn zero_minimum_lets_short_words_through() {
        let v = validator();
        assert_eq!(v.evaluate("SIT", "TELEVISION", &[], 0), Verdict::Accepted);
    }

    #[test]
    fn root_word_is_rejected() {
        let v = validator();
        assert_eq!(
            v.evaluate("TELEVISION", "TELEVISION", &[], 4),
            Verdict::Rejected(Rejection::IsRootWord)
        );
    }

    #[test]
    fn root_word_checked_before_originality() {
        let v = validator();
        assert_eq!(
            v.evaluate("TELEVISION", "TELEVISION", &used(&["TELEVISION"]), 4),
            Verdict::Rejected(Rejection::IsRootWord)
        );
    }

    #[test]
    fn used_word_is_not_original() {
        let v = validator();
        assert_eq!(
            v.evaluate("TILE", "TELEVISION", &used(&["LION", "TILE"]), 4),
            Verdict::Rejected(Rejection::NotOriginal)
        );
    }

    #[test]
    fn originality_checked_before_dictionary() {
        let v = validator();
        // Even an unknown word is reported as used when it is in the list
        assert_eq!(
            v.evaluate("NOTEL", "TELEVISION", &used(&["NOTEL"]), 4),
            Verdict::Rejected(Rejection::NotOriginal)
        );
        assert_eq!(v.oracle().lookups.get(), 0);
    }

    #[test]
    fn unknown_word_is_not_real() {
        let v = validator();
        assert_eq!(
            v.evaluate("NOTEL", "TELEVISION", &[], 4),
            Verdict::Rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn dictionary_checked_before_spelling() {
        let v = validator();
        // unknown and unspellable: the dictionary rule fires first
        assert_eq!(
            v.evaluate("QUARK", "TELEVISION", &[], 4),
            Verdict::Rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn dictionary_not_consulted_for_early_failures() {
        let v = validator();
        let _ = v.evaluate("SIT", "TELEVISION", &[], 4);
        let _ = v.evaluate("TELEVISION", "TELEVISION", &[], 4);
        assert_eq!(v.oracle().lookups.get(), 0);

        let _ = v.evaluate("TILE", "TELEVISION", &[], 4);
        assert_eq!(v.oracle().lookups.get(), 1);
    }

    #[test]
    fn language_is_passed_to_dictionary() {
        let v = WordValidator::with_language(FakeDictionary::new(&["TILE"]), "fr");
        assert_eq!(v.language(), "fr");
        assert_eq!(
            v.evaluate("TILE", "TELEVISION", &[], 4),
            Verdict::Rejected(Rejection::NotReal)
        );
    }

    #[test]
    fn spelling_respects_letter_counts() {
        let v = validator();
        assert_eq!(v.evaluate("TREE", "LETTER", &[], 4), Verdict::Accepted);
        assert_eq!(
            v.evaluate("TEETER", "LETTER", &[], 4),
            Verdict::Rejected(Rejection::NotPossible)
        );
        assert_eq!(
            v.evaluate("RATTLE", "LETTER", &[], 4),
            Verdict::Rejected(Rejection::NotPossible)
        );
        assert_eq!(
            v.evaluate("RETELL", "LETTER", &[], 4),
            Verdict::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn real_word_with_missing_letter_is_not_possible() {
        let v = validator();
        assert_eq!(
            v.evaluate("ELITE", "TILES", &[], 4),
            Verdict::Rejected(Rejection::NotPossible)
        );
    }

    #[test]
    fn rule_helpers() {
        assert!(is_long_enough("ÉTÉS", 4));
        assert!(!is_long_enough("ABC", 4));
        assert!(is_original("TILE", &used(&["LION"])));
        assert!(!is_original("LION", &used(&["LION"])));
        assert!(is_possible("NOTES", "STONE"));
        assert!(!is_possible("STONES", "STONE"));
    }
}
