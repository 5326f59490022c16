//! Root-letter pool
//!
//! Tracks the letters of the root word as a multiset and answers the
//! spellability question: can a candidate be formed from these letters,
//! respecting per-letter multiplicity?

use crate::core::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

/// Shuffle retry bound when the permutation lands on the original order
const SHUFFLE_ATTEMPTS: usize = 16;

/// The letters of a root word, in original order, with per-letter counts
#[derive(Debug, Clone)]
pub struct LetterPool {
    letters: Vec<u8>,
    counts: FxHashMap<u8, u8>,
}

impl LetterPool {
    /// Build the pool from a root word
    #[must_use]
    pub fn new(root: &Word) -> Self {
        let letters = root.letters().to_vec();

        let mut counts: FxHashMap<u8, u8> = FxHashMap::default();
        for &ch in &letters {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Self { letters, counts }
    }

    /// The root letters in their original order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the pool has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// How many times a letter appears in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check that `candidate` can be spelled from the pool
    ///
    /// Walks the candidate left to right, consuming one occurrence from a
    /// working copy of the counts per character. Equivalent to: the
    /// candidate's letter multiset is a sub-multiset of the pool.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining = self.counts.clone();

        for ch in candidate.chars() {
            if !ch.is_ascii() {
                return false;
            }
            match remaining.get_mut(&(ch as u8)) {
                Some(n) if *n > 0 => *n -= 1,
                _ => return false,
            }
        }

        true
    }

    /// Produce a shuffled display order of the letters
    ///
    /// Re-rolls when the shuffle lands on the original order, so the display
    /// never gives the root word away. Words whose letters admit only the
    /// identity permutation (single letter, or all letters equal) are
    /// returned as-is.
    pub fn shuffled(&self, rng: &mut impl Rng) -> Vec<u8> {
        let mut display = self.letters.clone();
        if self.counts.len() < 2 {
            return display;
        }

        for _ in 0..SHUFFLE_ATTEMPTS {
            display.shuffle(rng);
            if display != self.letters {
                break;
            }
        }

        display
    }
}
