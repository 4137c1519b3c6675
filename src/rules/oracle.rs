//! Dictionary capability consumed by the validator

/// Answers "is this a real word" for the validator
///
/// Implementations receive normalized (uppercase, trimmed) words. Lookups are expected
/// to be fast and local; a remote backend must block inside `is_recognized`.
pub trait DictionaryOracle {
    /// Whether `word` is a recognized word of `language` (an ISO 639-1 code such as `"en"`)
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Box<T> {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}
