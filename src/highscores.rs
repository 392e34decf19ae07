//! High score leaderboard
//!
//! In-memory only, tracks the top 10 scores for the current session; a full
//! reload starts fresh.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u32,
    /// Difficulty tier reached
    pub tier: u32,
}

/// High score leaderboard, sorted descending by score
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

    /// A score makes the board while there is room, or by beating the
    /// lowest entry. Zero never qualifies.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_none_or(|e| score > e.score)
    }

    /// Insertion point that keeps the board sorted descending; ties go
    /// below the existing entry
    fn slot_for(&self, score: u32) -> usize {
        self.entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len())
    }

    /// Rank a score would achieve (1-indexed), None if it doesn't qualify
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        self.qualifies(score).then(|| self.slot_for(score) + 1)
    }

    /// Record a qualifying score, trimming the board back to capacity.
    /// Returns the rank achieved (1-indexed).
    pub fn add_score(&mut self, score: u32, tier: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let slot = self.slot_for(score);
        self.entries.insert(slot, HighScoreEntry { score, tier });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_add_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(5, 1), Some(1));
        assert_eq!(scores.add_score(9, 3), Some(1));
        assert_eq!(scores.add_score(7, 2), Some(2));
        let values: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![9, 7, 5]);
        assert_eq!(scores.top_score(), Some(9));
    }

    #[test]
    fn test_board_trims_to_capacity() {
        let mut scores = HighScores::new();
        for s in 1..=15 {
            scores.add_score(s, 0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(15));
        // 6..=15 remain; 5 no longer qualifies
        assert!(!scores.qualifies(5));
        assert_eq!(scores.potential_rank(20), Some(1));
    }
}
