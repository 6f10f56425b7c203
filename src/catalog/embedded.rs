//! Embedded fallback word list
//!
//! A small word list compiled into the binary, used when no word list file
//! is supplied.

/// Raw embedded word list: lowercase ASCII words, lengths 3 through 10, one
/// per line.
pub const EMBEDDED_WORDS: &str = include_str!("../../data/words.txt");
