//! Round state: clue, trials, score
//!
//! One round pits the caller against a single secret word. The engine keeps
//! the trial counter and cumulative score; the secret word and the current
//! clue travel through the operation signatures.

mod engine;

pub use engine::{GuessError, MAX_TRIALS, PLACEHOLDER, RoundEngine};
