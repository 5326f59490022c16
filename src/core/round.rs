//! Round state
//!
//! Holds a round's immutable setup (root word, letter pool, shuffled display
//! order) and mutable progress (used words, score, key-word flag), and owns
//! the two state transitions: starting a round and recording an accepted word.

use crate::core::{LetterPool, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Minimum accepted candidate length
pub const MIN_WORD_LEN: usize = 3;

/// Points per letter of an accepted word
pub const BASE_SCORE: u32 = 100;

/// Flat bonus for reconstructing the root word itself
pub const KEY_WORD_BONUS: u32 = 2000;

/// Availability fallback when the start-word list is empty
pub const DEFAULT_ROOT: &str = "silkworm";

/// State of one round of the game
#[derive(Debug, Clone)]
pub struct Round {
    root: Word,
    letters: LetterPool,
    shuffled: Vec<u8>,
    used_words: Vec<String>,
    score: u32,
    key_word_found: bool,
}

/// Outcome of recording an accepted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    /// The accepted word, normalized
    pub word: String,
    /// Points awarded for this word
    pub points: u32,
    /// True when the word reconstructed the root word itself
    pub key_word: bool,
}

impl Round {
    /// Start a round from a list of root-word candidates
    ///
    /// Picks one entry uniformly at random. An empty list falls back to
    /// [`DEFAULT_ROOT`]; a missing word *source* is the loader's concern and
    /// surfaces as an error there, not here.
    pub fn start(words: &[Word], rng: &mut impl Rng) -> Self {
        let root = words.choose(rng).cloned().unwrap_or_else(|| {
            Word::new(DEFAULT_ROOT).expect("default root word is valid")
        });
        Self::with_root(root, rng)
    }

    /// Start a round with a fixed root word
    pub fn with_root(root: Word, rng: &mut impl Rng) -> Self {
        let letters = LetterPool::new(&root);
        let shuffled = letters.shuffled(rng);

        Self {
            root,
            letters,
            shuffled,
            used_words: Vec::new(),
            score: 0,
            key_word_found: false,
        }
    }

    /// The round's root word
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Word {
        &self.root
    }

    /// The root letters as a multiset pool
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &LetterPool {
        &self.letters
    }

    /// The shuffled letter order used for display
    #[inline]
    #[must_use]
    pub fn shuffled_letters(&self) -> &[u8] {
        &self.shuffled
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Cumulative score for this round
    #[inline]
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the player has reconstructed the root word this round
    #[inline]
    #[must_use]
    pub fn key_word_found(&self) -> bool {
        self.key_word_found
    }

    /// Record a word the validator has accepted
    ///
    /// Prepends the word to the used list and scores it: `len * BASE_SCORE`
    /// normally, or a flat [`KEY_WORD_BONUS`] with the key-word flag raised
    /// when the word equals the root. The game does not end on the key word;
    /// the player may continue.
    pub(crate) fn record_accepted(&mut self, word: String) -> Acceptance {
        let key_word = word == self.root.text();
        let points = if key_word {
            KEY_WORD_BONUS
        } else {
            word.len() as u32 * BASE_SCORE
        };

        self.used_words.insert(0, word.clone());
        self.score += points;
        if key_word {
            self.key_word_found = true;
        }

        Acceptance {
            word,
            points,
            key_word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(root: &str) -> Round {
        let mut rng = StdRng::seed_from_u64(7);
        Round::with_root(Word::new(root).unwrap(), &mut rng)
    }

    #[test]
    fn start_picks_from_list() {
        let words = vec![Word::new("silkworm").unwrap()];
        let mut rng = StdRng::seed_from_u64(7);
        let round = Round::start(&words, &mut rng);
        assert_eq!(round.root().text(), "silkworm");
    }

    #[test]
    fn start_empty_list_falls_back_to_default() {
        let mut rng = StdRng::seed_from_u64(7);
        let round = Round::start(&[], &mut rng);
        assert_eq!(round.root().text(), DEFAULT_ROOT);
    }

    #[test]
    fn start_resets_progress() {
        let round = round("silkworm");
        assert!(round.used_words().is_empty());
        assert_eq!(round.score(), 0);
        assert!(!round.key_word_found());
    }

    #[test]
    fn shuffled_letters_are_a_permutation_of_root() {
        let round = round("silkworm");
        let mut shuffled = round.shuffled_letters().to_vec();
        shuffled.sort_unstable();
        let mut original = round.root().letters().to_vec();
        original.sort_unstable();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn record_accepted_scores_by_length() {
        let mut round = round("silkworm");
        let acceptance = round.record_accepted("silk".to_string());

        assert_eq!(acceptance.points, 400);
        assert!(!acceptance.key_word);
        assert_eq!(round.score(), 400);
        assert_eq!(round.used_words(), ["silk"]);
    }

    #[test]
    fn record_accepted_prepends() {
        let mut round = round("silkworm");
        round.record_accepted("silk".to_string());
        round.record_accepted("worm".to_string());

        assert_eq!(round.used_words(), ["worm", "silk"]);
    }

    #[test]
    fn record_accepted_key_word_bonus() {
        let mut round = round("silkworm");
        let acceptance = round.record_accepted("silkworm".to_string());

        assert_eq!(acceptance.points, KEY_WORD_BONUS);
        assert!(acceptance.key_word);
        assert_eq!(round.score(), 2000);
        assert!(round.key_word_found());
    }

    #[test]
    fn score_accumulates_monotonically() {
        let mut round = round("silkworm");
        round.record_accepted("silk".to_string());
        round.record_accepted("worm".to_string());
        round.record_accepted("silkworm".to_string());

        assert_eq!(round.score(), 400 + 400 + 2000);
    }
}
