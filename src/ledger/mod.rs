//! Per-word score store
//!
//! Maps a word to the score recorded for it. Independent of any live round
//! state; lives for the duration of the ledger instance.

use rustc_hash::FxHashMap;

/// In-memory score store keyed by word.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    scores: FxHashMap<String, f64>,
}

impl ScoreLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `score` for `word`, overwriting any earlier entry.
    ///
    /// Always succeeds; the returned flag is for callers that want to
    /// confirm the write.
    pub fn save(&mut self, word: impl Into<String>, score: f64) -> bool {
        self.scores.insert(word.into(), score);
        true
    }

    /// The stored score for `word`, or 0.0 if it was never saved.
    ///
    /// Absence is not distinguished from a stored zero.
    #[must_use]
    pub fn lookup(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_reports_success() {
        let mut ledger = ScoreLedger::new();
        assert!(ledger.save("pizza", 10.0));
    }

    #[test]
    fn lookup_returns_saved_score() {
        let mut ledger = ScoreLedger::new();
        ledger.save("pizza", 10.0);
        assert!((ledger.lookup("pizza") - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lookup_unseen_word_is_zero() {
        let ledger = ScoreLedger::new();
        assert!((ledger.lookup("unseen") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn save_overwrites_existing_entry() {
        let mut ledger = ScoreLedger::new();
        ledger.save("pizza", 4.0);
        ledger.save("pizza", 8.0);
        assert!((ledger.lookup("pizza") - 8.0).abs() < f64::EPSILON);
    }
}
