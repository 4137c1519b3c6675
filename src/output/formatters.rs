//! Formatting utilities for player-facing text
//!
//! The game core only reports *why* a word was rejected; the wording lives here.

use crate::rules::Rejection;

/// Title and message shown to the player after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Build the alert for a rejection
///
/// `root_word` and `minimum_length` are interpolated into the messages that mention them.
#[must_use]
pub fn rejection_alert(reason: Rejection, root_word: &str, minimum_length: usize) -> Alert {
    let (title, message) = match reason {
        Rejection::TooShort => (
            "Word is too short",
            format!("Minimum length of word is {minimum_length}"),
        ),
        Rejection::IsRootWord => (
            "Word is identical to the starting word",
            "Really dude?".to_string(),
        ),
        Rejection::NotOriginal => ("Used already", "Be more original!".to_string()),
        Rejection::NotReal => (
            "Word not recognized",
            "You can't just make them up!".to_string(),
        ),
        Rejection::NotPossible => (
            "Word not possible",
            format!("You can't spell that word from '{root_word}'"),
        ),
    };

    Alert {
        title: title.to_string(),
        message,
    }
}

/// Running score line
#[must_use]
pub fn score_line(score: usize) -> String {
    format!("Your current score is {score}")
}

/// Letter count as a circled number, e.g. `④`
///
/// Falls back to `(n)` past twenty.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = word.chars().count();
    let circled = u32::try_from(len)
        .ok()
        .filter(|n| (1..=20).contains(n))
        .and_then(|n| char::from_u32(0x2460 + n - 1));
    circled.map_or_else(|| format!("({len})"), String::from)
}

/// A used word with its length badge in front
#[must_use]
pub fn used_word_line(word: &str) -> String {
    format!("{} {word}", length_badge(word))
}
