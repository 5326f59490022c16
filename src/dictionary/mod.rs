//! Dictionary-lookup capability
//!
//! The realness check is delegated to an injected [`Dictionary`]: the core
//! consumes a boolean "is this a real word" answer and embeds no dictionary
//! data itself. The concrete backing is chosen at wire-up time: the embedded
//! offline word set, a word set loaded from a file, or a test double built
//! from a fixed set of words.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// An oracle answering whether a word is correctly spelled in some locale
pub trait Dictionary {
    /// Whether `word` is a recognized, correctly spelled word
    fn is_real_word(&self, word: &str) -> bool;

    /// The language/locale tag this dictionary answers for
    fn locale(&self) -> &str;
}

/// A dictionary backed by an in-memory word set
///
/// Lookup is an exact-match set membership test over lowercase words.
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    words: FxHashSet<String>,
    locale: String,
}

impl WordSetDictionary {
    /// Build a dictionary from any collection of words, locale `"en"`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordSetDictionary};
    ///
    /// let dict = WordSetDictionary::from_words(["silk", "worm"]);
    /// assert!(dict.is_real_word("silk"));
    /// assert!(!dict.is_real_word("xyzzy"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            locale: "en".to_string(),
        }
    }

    /// Build the default dictionary from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(crate::wordlists::DICTIONARY.iter().copied())
    }

    /// Load a dictionary from a newline-delimited word file
    ///
    /// Empty lines are filtered; entries are lowercased.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_lowercase);

        Ok(Self::from_words(words))
    }

    /// Override the locale tag
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Number of words in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn is_real_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}
