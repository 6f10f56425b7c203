//! Word catalog
//!
//! Holds the full word list in load order plus the set of words already
//! dispensed this session, and resolves requests for an unused word of a
//! given length.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_WORDS;

use rustc_hash::FxHashSet;

/// A session-scoped catalog of words.
///
/// The word list keeps its load order; the used-word set only grows. One
/// catalog instance owns one session — concurrent games should each get
/// their own instance.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<String>,
    used: FxHashSet<String>,
}

impl WordCatalog {
    /// Create a catalog from an already-loaded word list.
    ///
    /// The list is taken as-is: order preserved, duplicates kept, no
    /// content validation.
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            used: FxHashSet::default(),
        }
    }

    /// Fetch the first unused word with exactly `requested_length` characters.
    ///
    /// Scans the list in load order and marks the returned word as used in
    /// the same step, so repeated calls never hand out the same word twice.
    /// Returns `None` when no eligible word remains — a normal outcome the
    /// caller is expected to check, not an error.
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::catalog::WordCatalog;
    ///
    /// let mut catalog = WordCatalog::new(vec!["apple".to_string(), "grape".to_string()]);
    /// assert_eq!(catalog.fetch_word(5), Some("apple"));
    /// assert_eq!(catalog.fetch_word(5), Some("grape"));
    /// assert_eq!(catalog.fetch_word(5), None);
    /// ```
    pub fn fetch_word(&mut self, requested_length: usize) -> Option<&str> {
        for word in &self.words {
            if word.chars().count() != requested_length {
                continue;
            }
            // insert returns false for an already-used word
            if self.used.insert(word.clone()) {
                return Some(word);
            }
        }
        None
    }

    /// Number of words in the catalog, used or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the catalog holds no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Count how often `letter` occurs in `word`.
///
/// Exact, case-sensitive character comparison — no normalization. A letter
/// absent from the word counts as 0.
///
/// # Examples
/// ```
/// use hangman_engine::catalog::count_occurrences;
///
/// assert_eq!(count_occurrences("pizza", 'z'), 2);
/// assert_eq!(count_occurrences("pizza", 'x'), 0);
/// ```
#[must_use]
pub fn count_occurrences(word: &str, letter: char) -> usize {
    word.chars().filter(|&c| c == letter).count()
}
