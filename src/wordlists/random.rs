//! Random root word selection

use crate::game::RootWordSource;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A list of candidate root words drawn from uniformly at random
pub struct WordList {
    words: Vec<String>,
    rng: StdRng,
}

impl WordList {
    /// Create a list seeded from the operating system
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a list with a fixed seed, so the sequence of draws is reproducible
    #[must_use]
    pub fn seeded(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl RootWordSource for WordList {
    fn random_word(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}
