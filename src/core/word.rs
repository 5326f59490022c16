//! Root-word representation
//!
//! A Word is a validated lowercase alphabetic string, used for round root words
//! and word-list entries.

use std::fmt;

/// A lowercase ASCII-alphabetic word
///
/// Input is normalized to lowercase on construction; empty strings and
/// non-alphabetic content are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Word;
    ///
    /// let word = Word::new("Silkworm").unwrap();
    /// assert_eq!(word.text(), "silkworm");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("s1lk").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("silkworm").unwrap();
        assert_eq!(word.text(), "silkworm");
        assert_eq!(word.letters(), b"silkworm");
        assert_eq!(word.len(), 8);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("SILKWORM").unwrap();
        assert_eq!(word.text(), "silkworm");

        let word2 = Word::new("SilkWorm").unwrap();
        assert_eq!(word2.text(), "silkworm");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("s1lk").is_err()); // Number
        assert!(Word::new("sil k").is_err()); // Space
        assert!(Word::new("silk!").is_err()); // Punctuation
    }

    #[test]
    fn word_creation_non_ascii() {
        assert!(Word::new("sílk").is_err());
    }

    #[test]
    fn word_display() {
        let word = Word::new("silk").unwrap();
        assert_eq!(format!("{word}"), "silk");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("silk").unwrap();
        let word2 = Word::new("silk").unwrap();
        let word3 = Word::new("SILK").unwrap();
        let word4 = Word::new("worm").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }
}
