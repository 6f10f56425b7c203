//! Round engine: clue updates, trial counting, scoring
//!
//! A clue mirrors the secret word character for character, with unguessed
//! positions masked by [`PLACEHOLDER`]. Every accepted guess costs one
//! trial; every newly-revealed position earns `MAX_TRIALS / word length`
//! points, with the division truncating toward zero.

use std::fmt;

/// Trials granted at the start of every round.
pub const MAX_TRIALS: u32 = 10;

/// Mask character for positions not yet revealed.
pub const PLACEHOLDER: char = '-';

/// Error type for rejected guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// The guessed character is not a letter a-z (after case normalization).
    InvalidCharacter,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter => write!(f, "Invalid character"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Trial counter and score for the round in play.
///
/// The engine does not reject guesses submitted after the trials run out or
/// after the word is fully revealed; callers detect the end of a round from
/// the returned clue and [`RoundEngine::remaining_trials`].
#[derive(Debug, Clone)]
pub struct RoundEngine {
    remaining_trials: u32,
    score: f64,
}

impl RoundEngine {
    /// Create an engine ready for its first round.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining_trials: MAX_TRIALS,
            score: 0.0,
        }
    }

    /// Begin a round against `secret`, returning the fully-masked clue.
    ///
    /// Resets the trial counter to [`MAX_TRIALS`] and the score to zero.
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::round::RoundEngine;
    ///
    /// let mut engine = RoundEngine::new();
    /// assert_eq!(engine.start_round("pizza"), "-----");
    /// assert_eq!(engine.remaining_trials(), 10);
    /// ```
    pub fn start_round(&mut self, secret: &str) -> String {
        self.remaining_trials = MAX_TRIALS;
        self.score = 0.0;
        secret.chars().map(|_| PLACEHOLDER).collect()
    }

    /// Submit a single-letter guess, returning the updated clue.
    ///
    /// The guess is normalized to lowercase, so `'A'` and `'a'` are
    /// equivalent. Every position where `secret` holds the guessed letter
    /// and `clue` still holds the placeholder is revealed, and each reveal
    /// adds `MAX_TRIALS / secret length` (integer division) to the score.
    /// Positions revealed earlier are not re-scored. One trial is consumed
    /// by every accepted guess, correct, wrong, or repeated; the counter
    /// bottoms out at zero.
    ///
    /// `clue` is expected to be the string the previous call returned; a
    /// clue shorter than the secret truncates the update rather than
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidCharacter`] if the normalized guess
    /// falls outside `a`-`z` (digits, punctuation, whitespace, non-ASCII).
    /// A rejected guess leaves the clue, the trial counter, and the score
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::round::RoundEngine;
    ///
    /// let mut engine = RoundEngine::new();
    /// let clue = engine.start_round("pizza");
    /// let clue = engine.guess("pizza", &clue, 'a').unwrap();
    /// assert_eq!(clue, "----a");
    /// assert_eq!(engine.guess("pizza", &clue, 'p').unwrap(), "p---a");
    /// ```
    pub fn guess(&mut self, secret: &str, clue: &str, letter: char) -> Result<String, GuessError> {
        // Validate before touching any state
        let letter = normalize_guess(letter)?;

        let mut updated = String::with_capacity(clue.len());
        let mut revealed = 0usize;

        for (secret_char, clue_char) in secret.chars().zip(clue.chars()) {
            if secret_char == letter && clue_char == PLACEHOLDER {
                updated.push(secret_char);
                revealed += 1;
            } else {
                updated.push(clue_char);
            }
        }

        if revealed > 0 {
            // Integer division: a five-letter word pays 2 per reveal, not 2.0 exact
            let bonus = MAX_TRIALS as usize / secret.chars().count();
            self.score += (revealed * bonus) as f64;
        }

        self.remaining_trials = self.remaining_trials.saturating_sub(1);
        Ok(updated)
    }

    /// Trials left in the current round.
    #[must_use]
    pub const fn remaining_trials(&self) -> u32 {
        self.remaining_trials
    }

    /// Cumulative score of the current round.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a guess to lowercase and reject anything outside a-z.
const fn normalize_guess(letter: char) -> Result<char, GuessError> {
    let letter = letter.to_ascii_lowercase();
    if letter.is_ascii_lowercase() {
        Ok(letter)
    } else {
        Err(GuessError::InvalidCharacter)
    }
}
