//! Session leaderboard
//!
//! Tracks the top 10 finished runs for the lifetime of the process. Nothing
//! is written to storage.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Obstacles cleared
    pub score: u64,
    /// Simulated ticks survived
    pub ticks: u64,
    /// Which run of the session
    pub run: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A score qualifies if it is positive and the board has room or it
    /// strictly beats the lowest entry. Equalling the lowest is not enough.
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|lowest| score > lowest.score))
    }

    /// Record a finished run. Returns its 1-based rank, or `None` if it
    /// didn't make the board.
    pub fn add_score(&mut self, score: u64, ticks: u64, run: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        // Insert after every entry with an equal or higher score, so an
        // earlier run keeps its place over a later one with the same score
        let index = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(index, HighScoreEntry { score, ticks, run });
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 100, 1), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(5, 500, 1), Some(1));
        assert_eq!(scores.add_score(9, 900, 2), Some(1));
        assert_eq!(scores.add_score(7, 700, 3), Some(2));
        // Tie goes after the existing entry
        assert_eq!(scores.add_score(7, 650, 4), Some(3));

        let order: Vec<u32> = scores.entries.iter().map(|e| e.run).collect();
        assert_eq!(order, vec![2, 3, 4, 1]);
        assert_eq!(scores.top_score(), Some(9));
    }

    #[test]
    fn test_capped_at_max() {
        let mut scores = HighScores::new();
        for run in 1..=MAX_HIGH_SCORES as u32 {
            scores.add_score(10 + run as u64, 0, run);
        }
        assert!(!scores.qualifies(5));
        assert_eq!(scores.add_score(5, 0, 99), None);
        assert_eq!(scores.add_score(100, 0, 100), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(12));
    }

    #[test]
    fn test_tie_with_lowest_on_full_board_is_rejected() {
        let mut scores = HighScores::new();
        for run in 1..=MAX_HIGH_SCORES as u32 {
            scores.add_score(10, 0, run);
        }
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_score(10, 0, 99), None);
        assert!(scores.entries.iter().all(|e| e.run != 99));
        assert_eq!(scores.add_score(11, 0, 100), Some(1));
        assert_eq!(scores.entries.last().map(|e| e.run), Some(9));
    }
}
