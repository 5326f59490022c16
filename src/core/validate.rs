//! Submission validation
//!
//! Classifies a normalized candidate against four checks in fixed order,
//! short-circuiting at the first failure: length, originality, spellability
//! from the root letters, and dictionary realness. All checks are read-only
//! predicates over the round and the candidate.

use crate::core::round::{MIN_WORD_LEN, Round};
use crate::dictionary::Dictionary;
use std::fmt;

/// Why a submission was rejected
///
/// Exactly one rejection is reported per submission: the first failing check
/// in order. All variants are user-input rejections; none corrupts state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Shorter than the minimum accepted length
    TooShort,
    /// Already accepted earlier this round
    AlreadyUsed,
    /// Cannot be formed from the root letters
    NotSpellableFromRoot,
    /// Not a recognized word per the dictionary
    NotARecognizedWord,
}

impl Rejection {
    /// Short title for the UI
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Too short",
            Self::AlreadyUsed => "Word used already",
            Self::NotSpellableFromRoot => "Word not possible",
            Self::NotARecognizedWord => "Word not recognized",
        }
    }

    /// Explanatory message for the UI
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Enter a word that's at least 3 letters long",
            Self::AlreadyUsed => "Be more original",
            Self::NotSpellableFromRoot => "You can't spell that word from the given letters",
            Self::NotARecognizedWord => "You can't just make them up, you know!",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}

/// Normalize raw input: lowercase, surrounding whitespace trimmed
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Classify a normalized candidate against the current round
///
/// # Errors
/// Returns the first failing check's [`Rejection`]; later checks are not
/// evaluated. Does not mutate the round.
pub fn evaluate<D: Dictionary>(
    round: &Round,
    dictionary: &D,
    candidate: &str,
) -> Result<(), Rejection> {
    if candidate.chars().count() < MIN_WORD_LEN {
        return Err(Rejection::TooShort);
    }

    if round.used_words().iter().any(|used| used == candidate) {
        return Err(Rejection::AlreadyUsed);
    }

    if !round.letters().can_spell(candidate) {
        return Err(Rejection::NotSpellableFromRoot);
    }

    if !dictionary.is_real_word(candidate) {
        return Err(Rejection::NotARecognizedWord);
    }

    Ok(())
}
