//! Word list loading
//!
//! Reads line-oriented word sources. A line's exact content becomes the
//! word: no trimming, no deduplication, no content validation.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line, in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. Callers may
/// treat this as a degraded state and continue with an empty catalog.
///
/// # Examples
/// ```no_run
/// use hangman_engine::catalog::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Split an in-memory word source into words, one per line.
///
/// Shared by file loading and the embedded list so both preserve lines
/// literally, trailing whitespace included.
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    content.lines().map(ToString::to_string).collect()
}

/// The embedded fallback word list as a vector.
///
/// # Examples
/// ```
/// use hangman_engine::catalog::loader::embedded_words;
///
/// let words = embedded_words();
/// assert!(!words.is_empty());
/// ```
#[must_use]
pub fn embedded_words() -> Vec<String> {
    words_from_str(super::EMBEDDED_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_str_preserves_order() {
        let words = words_from_str("alpha\nbeta\ngamma");
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn words_from_str_keeps_lines_literal() {
        // Trailing whitespace is part of the word
        let words = words_from_str("alpha\nbeta  \n  gamma");
        assert_eq!(words, vec!["alpha", "beta  ", "  gamma"]);
    }

    #[test]
    fn words_from_str_keeps_duplicates_and_empty_lines() {
        let words = words_from_str("pizza\n\npizza");
        assert_eq!(words, vec!["pizza", "", "pizza"]);
    }

    #[test]
    fn words_from_str_empty_source() {
        assert!(words_from_str("").is_empty());
    }

    #[test]
    fn embedded_words_are_clean() {
        let words = embedded_words();
        assert!(!words.is_empty());

        for word in &words {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "embedded word '{word}' is not lowercase ASCII"
            );
            assert!(
                (3..=10).contains(&word.len()),
                "embedded word '{word}' has unexpected length"
            );
        }
    }
}
