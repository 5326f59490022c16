//! Game session
//!
//! Owns the round state and the injected dictionary, and orchestrates
//! submissions: normalize, evaluate, record. The session is the only owner of
//! mutable game state; the UI layers hold one and never mutate rounds
//! directly.

use crate::core::round::{Acceptance, Round};
use crate::core::validate::{Rejection, evaluate, normalize};
use crate::core::word::Word;
use crate::dictionary::Dictionary;
use rand::Rng;

/// A game session: one round at a time plus the dictionary capability
pub struct Session<D: Dictionary> {
    round: Round,
    dictionary: D,
}

impl<D: Dictionary> Session<D> {
    /// Create a session from an existing round
    pub const fn new(round: Round, dictionary: D) -> Self {
        Self { round, dictionary }
    }

    /// Start a session with a fresh round drawn from `words`
    pub fn start(words: &[Word], dictionary: D, rng: &mut impl Rng) -> Self {
        Self::new(Round::start(words, rng), dictionary)
    }

    /// The current round
    #[inline]
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The injected dictionary
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Replace the current round with a fresh one
    ///
    /// Used words and score reset with the round; the dictionary is kept.
    pub fn new_round(&mut self, words: &[Word], rng: &mut impl Rng) {
        self.round = Round::start(words, rng);
    }

    /// Submit raw input against the current round
    ///
    /// Normalizes the input, runs the four checks in order, and on acceptance
    /// records the word (score and used-word list update). Rejections leave
    /// the round untouched.
    ///
    /// # Errors
    /// Returns the first failing check's [`Rejection`].
    pub fn submit(&mut self, raw: &str) -> Result<Acceptance, Rejection> {
        let candidate = normalize(raw);
        evaluate(&self.round, &self.dictionary, &candidate)?;
        Ok(self.round.record_accepted(candidate))
    }
}
