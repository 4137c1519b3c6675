//! Game session state
//!
//! The session is the only place game state changes. It owns the root word, the
//! accepted words and the score, and applies the validator's verdicts.

use super::source::RootWordSource;
use crate::config::GameConfig;
use crate::core::normalize;
use crate::rules::{DictionaryOracle, Rejection, Verdict, WordValidator};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Session-level failures
///
/// These are not rejections of a word: they mean the session could not do what was
/// asked at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The root word source produced nothing usable
    #[error("no root word available")]
    NoRootWordAvailable,
    /// A word was submitted before the session was started
    #[error("session has not been started")]
    NotStarted,
}

/// Result of submitting player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank after normalization; nothing happened
    Ignored,
    /// Word was added to the used words
    Accepted { word: String, points: usize },
    /// Word was turned down; state is unchanged
    Rejected(Rejection),
}

impl Submission {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// A single play-through from start (or restart) onwards
///
/// Created uninitialized; [`GameSession::start`] draws the first root word.
///
/// # Examples
/// ```
/// use word_scramble::config::GameConfig;
/// use word_scramble::game::{FixedRoots, GameSession, Submission};
/// use word_scramble::rules::WordValidator;
/// use word_scramble::wordlists::Lexicon;
///
/// let lexicon = Lexicon::from_words(["tile", "lion"]);
/// let mut session = GameSession::new(
///     FixedRoots::single("television"),
///     WordValidator::new(lexicon),
///     GameConfig::default(),
/// );
/// session.start().unwrap();
///
/// let result = session.submit("tile").unwrap();
/// assert_eq!(result, Submission::Accepted { word: "TILE".into(), points: 4 });
/// assert_eq!(session.score(), 4);
/// ```
pub struct GameSession<S, D> {
    source: S,
    validator: WordValidator<D>,
    config: GameConfig,
    root_word: Option<String>,
    used_words: Vec<String>,
    score: usize,
}

impl<S: RootWordSource, D: DictionaryOracle> GameSession<S, D> {
    /// Create an uninitialized session
    pub const fn new(source: S, validator: WordValidator<D>, config: GameConfig) -> Self {
        Self {
            source,
            validator,
            config,
            root_word: None,
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Draw a root word and reset the used words and score
    ///
    /// # Errors
    /// Returns `SessionError::NoRootWordAvailable` if the source yields nothing or only
    /// whitespace. The session is left exactly as it was.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let root_word = self
            .source
            .random_word()
            .map(|word| normalize(&word))
            .filter(|word| !word.is_empty())
            .ok_or_else(|| {
                warn!("root word source is empty");
                SessionError::NoRootWordAvailable
            })?;

        info!(root_word = %root_word, "starting session");
        self.root_word = Some(root_word);
        self.used_words.clear();
        self.score = 0;
        Ok(())
    }

    /// Start over with a freshly drawn root word
    ///
    /// # Errors
    /// Same as [`GameSession::start`]; on failure the current game is kept.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        debug!(
            score = self.score,
            words = self.used_words.len(),
            "restarting session"
        );
        self.start()
    }

    /// Submit raw player input
    ///
    /// The input is trimmed and uppercased first. Blank input is ignored. Accepted
    /// words go to the front of the used words and add their length to the score.
    ///
    /// # Errors
    /// Returns `SessionError::NotStarted` if called before [`GameSession::start`].
    pub fn submit(&mut self, raw: &str) -> Result<Submission, SessionError> {
        let root_word = self.root_word.as_deref().ok_or(SessionError::NotStarted)?;

        let candidate = normalize(raw);
        if candidate.is_empty() {
            return Ok(Submission::Ignored);
        }

        match self.validator.evaluate(
            &candidate,
            root_word,
            &self.used_words,
            self.config.minimum_word_length,
        ) {
            Verdict::Accepted => {
                let points = candidate.chars().count();
                self.score += points;
                self.used_words.insert(0, candidate.clone());
                info!(word = %candidate, points, score = self.score, "word accepted");
                Ok(Submission::Accepted {
                    word: candidate,
                    points,
                })
            }
            Verdict::Rejected(reason) => Ok(Submission::Rejected(reason)),
        }
    }

    /// Current root word, `None` before the first start
    #[must_use]
    pub fn root_word(&self) -> Option<&str> {
        self.root_word.as_deref()
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.root_word.is_some()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FixedRoots;
    use crate::wordlists::Lexicon;

    fn lexicon() -> Lexicon {
        Lexicon::from_words([
            "tile", "lion", "vision", "elite", "sit", "stone", "note", "notes", "silent", "listen",
            "tree", "letter", "visions",
        ])
    }

    fn session(root: &str) -> GameSession<FixedRoots, Lexicon> {
        let mut session = GameSession::new(
            FixedRoots::single(root),
            WordValidator::new(lexicon()),
            GameConfig::default(),
        );
        session.start().unwrap();
        session
    }

    #[test]
    fn new_session_is_uninitialized() {
        let session = GameSession::new(
            FixedRoots::single("television"),
            WordValidator::new(lexicon()),
            GameConfig::default(),
        );
        assert!(!session.is_active());
        assert_eq!(session.root_word(), None);
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn submit_before_start_fails() {
        let mut session = GameSession::new(
            FixedRoots::single("television"),
            WordValidator::new(lexicon()),
            GameConfig::default(),
        );
        assert_eq!(session.submit("tile"), Err(SessionError::NotStarted));
        // blank input is still a precondition failure, not a silent no-op
        assert_eq!(session.submit("  "), Err(SessionError::NotStarted));
    }

    #[test]
    fn start_normalizes_root_word() {
        let session = session("  television \n");
        assert!(session.is_active());
        assert_eq!(session.root_word(), Some("TELEVISION"));
    }

    #[test]
    fn start_with_empty_source_fails() {
        let mut session = GameSession::new(
            FixedRoots::default(),
            WordValidator::new(lexicon()),
            GameConfig::default(),
        );
        assert_eq!(session.start(), Err(SessionError::NoRootWordAvailable));
        assert!(!session.is_active());
    }

    #[test]
    fn start_with_blank_word_fails() {
        let mut session = GameSession::new(
            FixedRoots::single("   "),
            WordValidator::new(lexicon()),
            GameConfig::default(),
        );
        assert_eq!(session.start(), Err(SessionError::NoRootWordAvailable));
    }

    #[test]
    fn failed_restart_keeps_current_game() {
        let mut session = GameSession::new(
            FixedRoots::new(["television", "   "]),
            WordValidator::new(lexicon()),
            GameConfig::default(),
        );
        session.start().unwrap();
        session.submit("tile").unwrap();

        assert_eq!(session.restart(), Err(SessionError::NoRootWordAvailable));
        assert_eq!(session.root_word(), Some("TELEVISION"));
        assert_eq!(session.used_words(), ["TILE"]);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = session("television");
        assert_eq!(session.submit(""), Ok(Submission::Ignored));
        assert_eq!(session.submit(" \t\n"), Ok(Submission::Ignored));
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn accepted_word_updates_state() {
        let mut session = session("television");
        let result = session.submit(" tile ").unwrap();
        assert_eq!(
            result,
            Submission::Accepted {
                word: "TILE".to_string(),
                points: 4
            }
        );
        assert!(result.is_accepted());
        assert_eq!(session.used_words(), ["TILE"]);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn used_words_most_recent_first() {
        let mut session = session("television");
        session.submit("tile").unwrap();
        session.submit("lion").unwrap();
        session.submit("vision").unwrap();
        assert_eq!(session.used_words(), ["VISION", "LION", "TILE"]);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let mut session = session("television");
        session.submit("tile").unwrap();

        assert_eq!(
            session.submit("sit"),
            Ok(Submission::Rejected(Rejection::TooShort))
        );
        assert_eq!(
            session.submit("notel"),
            Ok(Submission::Rejected(Rejection::NotReal))
        );
        assert_eq!(session.used_words(), ["TILE"]);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn resubmitting_is_not_original() {
        let mut session = session("television");
        assert!(session.submit("lion").unwrap().is_accepted());
        assert_eq!(
            session.submit("LION"),
            Ok(Submission::Rejected(Rejection::NotOriginal))
        );
        assert_eq!(
            session.submit("  Lion "),
            Ok(Submission::Rejected(Rejection::NotOriginal))
        );
    }

    #[test]
    fn score_is_sum_of_lengths() {
        let mut session = session("television");
        for word in ["tile", "vision", "stone", "silent", "notes"] {
            assert!(session.submit(word).unwrap().is_accepted(), "{word}");
        }
        assert_eq!(session.score(), 4 + 6 + 5 + 6 + 5);
        let total: usize = session
            .used_words()
            .iter()
            .map(|word| word.chars().count())
            .sum();
        assert_eq!(session.score(), total);
    }

    #[test]
    fn score_counts_characters_not_bytes() {
        let mut session = GameSession::new(
            FixedRoots::single("étés"),
            WordValidator::new(Lexicon::from_words(["été"])),
            GameConfig::default().with_minimum_word_length(3),
        );
        session.start().unwrap();

        assert_eq!(
            session.submit("été"),
            Ok(Submission::Accepted {
                word: "ÉTÉ".to_string(),
                points: 3,
            })
        );
        assert_eq!(session.score(), 3);
        assert_eq!("ÉTÉ".len(), 5);
    }

    #[test]
    fn restart_resets_mid_game() {
        let mut session = GameSession::new(
            FixedRoots::new(["television", "letter"]),
            WordValidator::new(lexicon()),
            GameConfig::default(),
        );
        session.start().unwrap();
        session.submit("tile").unwrap();
        session.submit("lion").unwrap();
        assert_eq!(session.score(), 8);

        session.restart().unwrap();
        assert!(session.is_active());
        assert_eq!(session.root_word(), Some("LETTER"));
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);

        // words from the previous game can be played again if possible
        assert!(session.submit("tree").unwrap().is_accepted());
    }

    #[test]
    fn restart_with_same_root_clears_used_words() {
        let mut session = session("television");
        session.submit("tile").unwrap();
        session.restart().unwrap();
        assert_eq!(session.root_word(), Some("TELEVISION"));
        assert!(session.submit("tile").unwrap().is_accepted());
    }

    #[test]
    fn configured_minimum_length_applies() {
        let mut session = GameSession::new(
            FixedRoots::single("television"),
            WordValidator::new(lexicon()),
            GameConfig::default().with_minimum_word_length(5),
        );
        session.start().unwrap();
        assert_eq!(
            session.submit("tile"),
            Ok(Submission::Rejected(Rejection::TooShort))
        );
        assert!(session.submit("stone").unwrap().is_accepted());
        assert_eq!(session.config().minimum_word_length, 5);
    }

    #[test]
    fn television_walkthrough() {
        let mut session = session("television");

        assert!(session.submit("TILE").unwrap().is_accepted());
        assert_eq!(session.score(), 4);
        assert_eq!(
            session.submit("tile"),
            Ok(Submission::Rejected(Rejection::NotOriginal))
        );
        assert_eq!(
            session.submit("SIT"),
            Ok(Submission::Rejected(Rejection::TooShort))
        );
        assert_eq!(
            session.submit("TELEVISION"),
            Ok(Submission::Rejected(Rejection::IsRootWord))
        );
        assert_eq!(
            session.submit("NOTEL"),
            Ok(Submission::Rejected(Rejection::NotReal))
        );
        // TELEVISION has only one S
        assert_eq!(
            session.submit("VISIONS"),
            Ok(Submission::Rejected(Rejection::NotPossible))
        );
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn elite_needs_two_es() {
        let mut session = session("tiles");
        assert_eq!(
            session.submit("elite"),
            Ok(Submission::Rejected(Rejection::NotPossible))
        );

        let mut session = self::session("television");
        assert!(session.submit("elite").unwrap().is_accepted());
    }
}
