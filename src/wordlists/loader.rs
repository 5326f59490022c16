//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Empty lines are filtered here, before root-word selection ever sees them;
/// entries that fail `Word` validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["silkworm", "treasure", "lantern"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "silkworm");
        assert_eq!(words[1].text(), "treasure");
        assert_eq!(words[2].text(), "lantern");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["silkworm", "not a word", "s1lk", "treasure"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "silkworm");
        assert_eq!(words[1].text(), "treasure");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_file_filters_empty_lines() {
        let mut file = tempfile_path("wordlist_empty_lines");
        writeln!(file.1, "silkworm\n\n  \ntreasure\n").unwrap();
        drop(file.1);

        let words = load_from_file(&file.0).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "silkworm");
        assert_eq!(words[1].text(), "treasure");

        std::fs::remove_file(&file.0).ok();
    }

    #[test]
    fn load_from_file_missing_is_an_error() {
        let result = load_from_file("no/such/wordlist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_embedded_start_words() {
        use crate::wordlists::START_WORDS;

        let words = words_from_slice(START_WORDS);
        assert_eq!(words.len(), START_WORDS.len());
    }

    fn tempfile_path(name: &str) -> (std::path::PathBuf, std::fs::File) {
        let path = std::env::temp_dir().join(format!("word_scramble_{name}_{}", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        (path, file)
    }
}
