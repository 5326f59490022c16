//! Word Scramble
//!
//! An anagram word game: spell words from the letters of a shuffled root word,
//! each letter usable at most as many times as it appears. Submissions are
//! validated for length, originality, spellability, and dictionary realness;
//! reconstructing the root word itself earns a bonus.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Round, Session, Word};
//! use word_scramble::dictionary::WordSetDictionary;
//!
//! let mut rng = rand::rng();
//! let round = Round::with_root(Word::new("silkworm").unwrap(), &mut rng);
//! let dictionary = WordSetDictionary::from_words(["silk", "worm"]);
//!
//! let mut session = Session::new(round, dictionary);
//! let acceptance = session.submit("silk").unwrap();
//! assert_eq!(acceptance.points, 400);
//! ```

// Core domain types
pub mod core;

// Dictionary-lookup capability
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
