//! Root word supply

/// Supplies the root word for a new session
///
/// Returned words may be in any case and carry surrounding whitespace; the session
/// normalizes them. `None` means the source has nothing to offer.
pub trait RootWordSource {
    fn random_word(&mut self) -> Option<String>;
}

impl<T: RootWordSource + ?Sized> RootWordSource for &mut T {
    fn random_word(&mut self) -> Option<String> {
        (**self).random_word()
    }
}

impl<T: RootWordSource + ?Sized> RootWordSource for Box<T> {
    fn random_word(&mut self) -> Option<String> {
        (**self).random_word()
    }
}

/// Hands out a fixed list of root words in order, wrapping around at the end
///
/// Useful whenever the root word must be known in advance: checking words against a
/// chosen root, or tests.
#[derive(Debug, Clone, Default)]
pub struct FixedRoots {
    words: Vec<String>,
    next: usize,
}

impl FixedRoots {
    #[must_use]
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// A source that always yields `word`
    #[must_use]
    pub fn single(word: impl Into<String>) -> Self {
        Self::new([word.into()])
    }
}

impl RootWordSource for FixedRoots {
    fn random_word(&mut self) -> Option<String> {
        let word = self.words.get(self.next)?.clone();
        self.next = (self.next + 1) % self.words.len();
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_roots_cycle() {
        let mut source = FixedRoots::new(["silkworm", "lanterns"]);
        assert_eq!(source.random_word().as_deref(), Some("silkworm"));
        assert_eq!(source.random_word().as_deref(), Some("lanterns"));
        assert_eq!(source.random_word().as_deref(), Some("silkworm"));
    }

    #[test]
    fn empty_fixed_roots_yield_nothing() {
        let mut source = FixedRoots::default();
        assert_eq!(source.random_word(), None);
        assert_eq!(source.random_word(), None);
    }

    #[test]
    fn single_always_same() {
        let mut source = FixedRoots::single("TELEVISION");
        for _ in 0..3 {
            assert_eq!(source.random_word().as_deref(), Some("TELEVISION"));
        }
    }
}
