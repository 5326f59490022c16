//! Core domain types for the word game
//!
//! Round state, the letter pool, submission validation, and the session that
//! ties them together. Everything here is pure and synchronous; the only
//! external collaborator is the injected [`crate::dictionary::Dictionary`].

mod letters;
pub mod round;
mod session;
pub mod validate;
mod word;

pub use letters::LetterPool;
pub use round::{Acceptance, BASE_SCORE, DEFAULT_ROOT, KEY_WORD_BONUS, MIN_WORD_LEN, Round};
pub use session::Session;
pub use validate::{Rejection, evaluate, normalize};
pub use word::{Word, WordError};
