//! Hangman Engine
//!
//! A word-guessing game engine: a catalog that dispenses unused words by length,
//! a round engine that tracks the clue, remaining trials, and score, and a
//! ledger that records final scores per word.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_engine::catalog::WordCatalog;
//! use hangman_engine::round::RoundEngine;
//!
//! // Fetch an unused five-letter word
//! let mut catalog = WordCatalog::new(vec!["pizza".to_string()]);
//! let secret = catalog.fetch_word(5).expect("a five-letter word").to_string();
//!
//! // Play a round against it
//! let mut engine = RoundEngine::new();
//! let clue = engine.start_round(&secret);
//! assert_eq!(clue, "-----");
//!
//! let clue = engine.guess(&secret, &clue, 'z').unwrap();
//! assert_eq!(clue, "--zz-");
//! assert_eq!(engine.remaining_trials(), 9);
//! assert!((engine.score() - 4.0).abs() < f64::EPSILON);
//! ```

// Word catalog and list loading
pub mod catalog;

// Round state: clue, trials, score
pub mod round;

// Per-word score store
pub mod ledger;
