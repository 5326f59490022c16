//! One-shot word check command
//!
//! Classifies a single candidate against a given root word, without an
//! interactive round.

use crate::core::{Acceptance, Rejection, Round, Session, Word, normalize};
use crate::dictionary::Dictionary;
use rand::Rng;

/// Result of checking a candidate against a root word
pub struct CheckResult {
    pub root: String,
    pub candidate: String,
    pub outcome: Result<Acceptance, Rejection>,
}

/// Check a single candidate against a root word
///
/// Builds a fresh round for the given root and submits the candidate once.
///
/// # Errors
///
/// Returns an error if the root word itself is invalid (empty or
/// non-alphabetic).
pub fn check_word<D: Dictionary>(
    root: &str,
    candidate: &str,
    dictionary: D,
    rng: &mut impl Rng,
) -> Result<CheckResult, String> {
    let root_word = Word::new(root).map_err(|e| format!("Invalid root word: {e}"))?;

    let round = Round::with_root(root_word.clone(), rng);
    let mut session = Session::new(round, dictionary);
    let outcome = session.submit(candidate);

    Ok(CheckResult {
        root: root_word.text().to_string(),
        candidate: normalize(candidate),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSetDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordSetDictionary {
        WordSetDictionary::from_words(["silk", "worm", "silkworm"])
    }

    #[test]
    fn check_accepts_valid_word() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = check_word("silkworm", "silk", dictionary(), &mut rng).unwrap();

        assert_eq!(result.root, "silkworm");
        assert_eq!(result.candidate, "silk");
        let acceptance = result.outcome.unwrap();
        assert_eq!(acceptance.points, 400);
    }

    #[test]
    fn check_reports_rejection() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = check_word("silkworm", "xyz", dictionary(), &mut rng).unwrap();

        assert_eq!(result.outcome, Err(Rejection::NotSpellableFromRoot));
    }

    #[test]
    fn check_key_word() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = check_word("silkworm", "silkworm", dictionary(), &mut rng).unwrap();

        let acceptance = result.outcome.unwrap();
        assert!(acceptance.key_word);
        assert_eq!(acceptance.points, 2000);
    }

    #[test]
    fn check_invalid_root() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = check_word("not a root", "silk", dictionary(), &mut rng);
        assert!(result.is_err());
    }
}
