//! Rejection reasons and verdicts

use thiserror::Error;

/// Why a candidate word was turned down
///
/// Variants are listed in the order the validator checks them. The first failing
/// check wins, so a word that is both too short and unknown is reported as `TooShort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// Fewer letters than the configured minimum
    #[error("word is shorter than the minimum length")]
    TooShort,
    /// Same as the root word
    #[error("word is the root word itself")]
    IsRootWord,
    /// Already accepted earlier in this session
    #[error("word has already been used")]
    NotOriginal,
    /// Not recognized by the dictionary
    #[error("word is not recognized")]
    NotReal,
    /// Needs letters the root word does not have (or not enough copies of them)
    #[error("word cannot be spelled from the root word")]
    NotPossible,
}

impl Rejection {
    /// All reasons in check order
    pub const ALL: [Self; 5] = [
        Self::TooShort,
        Self::IsRootWord,
        Self::NotOriginal,
        Self::NotReal,
        Self::NotPossible,
    ];
}

/// Outcome of evaluating a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Rejection> for Verdict {
    fn from(reason: Rejection) -> Self {
        Self::Rejected(reason)
    }
}
