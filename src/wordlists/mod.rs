//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary: root-word
//! candidates for new rounds and the offline dictionary backing the default
//! realness check.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_valid_words() {
        // Long enough to scramble, lowercase alphabetic
        for &word in START_WORDS {
            assert!(word.len() >= 6, "Word '{word}' is too short for a root");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert!(!word.is_empty(), "Dictionary contains an empty entry");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_subset_of_dictionary() {
        // Every root word must be findable as the key word
        let dictionary_set: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &start in START_WORDS {
            assert!(
                dictionary_set.contains(&start),
                "Start word '{start}' not in dictionary"
            );
        }
    }

    #[test]
    fn default_root_is_a_start_word() {
        assert!(START_WORDS.contains(&crate::core::DEFAULT_ROOT));
    }
}
