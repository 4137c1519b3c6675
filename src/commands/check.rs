//! Check words against a chosen root word
//!
//! Plays a list of words through a fresh session whose root word is fixed.

use crate::config::GameConfig;
use crate::game::{FixedRoots, GameSession, SessionError, Submission};
use crate::rules::{DictionaryOracle, WordValidator};

/// Result of checking a list of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub root_word: String,
    pub steps: Vec<CheckStep>,
    pub score: usize,
    pub minimum_length: usize,
}

/// One submitted word and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStep {
    pub input: String,
    pub submission: Submission,
}

impl CheckResult {
    /// Number of accepted words
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.submission.is_accepted())
            .count()
    }
}

/// Submit `words` in order to a session rooted at `root_word`
///
/// # Errors
///
/// Returns `SessionError::NoRootWordAvailable` if `root_word` is blank.
pub fn check_words<D: DictionaryOracle>(
    root_word: &str,
    words: &[String],
    oracle: D,
    config: &GameConfig,
) -> Result<CheckResult, SessionError> {
    let validator = WordValidator::with_language(oracle, config.language.clone());
    let mut session = GameSession::new(FixedRoots::single(root_word), validator, config.clone());
    session.start()?;

    let mut steps = Vec::with_capacity(words.len());
    for input in words {
        let submission = session.submit(input)?;
        steps.push(CheckStep {
            input: input.clone(),
            submission,
        });
    }

    Ok(CheckResult {
        root_word: session.root_word().unwrap_or_default().to_string(),
        steps,
        score: session.score(),
        minimum_length: config.minimum_word_length,
    })
}
