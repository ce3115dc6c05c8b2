//! The leaderboard contract shared by every score store.

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// One submitted result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player_name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(player_name: impl Into<String>, score: u32) -> Self {
        Self {
            player_name: player_name.into(),
            score,
        }
    }
}

/// Persistence collaborator for finished games.
///
/// The game engine never calls this; the host submits a score after it has
/// observed a terminal state.
pub trait ScoreStore: Send {
    /// Record `score` for `player_name`. Blank names are rejected.
    fn submit_score(&mut self, player_name: &str, score: u32) -> Result<(), ScoreError>;

    /// Best `limit` entries, highest score first. Equal scores keep
    /// submission order.
    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, ScoreError>;
}

/// Trim and check a player name.
pub fn validate_name(player_name: &str) -> Result<String, ScoreError> {
    let name = player_name.trim();
    if name.is_empty() {
        return Err(ScoreError::InvalidName);
    }
    Ok(name.to_string())
}

/// Sort submission-ordered entries into leaderboard order and keep `limit`.
pub fn rank(entries: &[ScoreEntry], limit: usize) -> Vec<ScoreEntry> {
    let mut ranked = entries.to_vec();
    // Stable sort: ties stay in submission order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  ada ").unwrap(), "ada");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(matches!(validate_name(""), Err(ScoreError::InvalidName)));
        assert!(matches!(validate_name("   \t"), Err(ScoreError::InvalidName)));
    }

    #[test]
    fn test_rank_orders_and_limits() {
        let entries = vec![
            ScoreEntry::new("a", 30),
            ScoreEntry::new("b", 90),
            ScoreEntry::new("c", 30),
            ScoreEntry::new("d", 60),
        ];
        let top = rank(&entries, 3);
        assert_eq!(
            top,
            vec![
                ScoreEntry::new("b", 90),
                ScoreEntry::new("d", 60),
                ScoreEntry::new("a", 30),
            ]
        );
    }

    #[test]
    fn test_rank_zero_limit() {
        assert!(rank(&[ScoreEntry::new("a", 10)], 0).is_empty());
    }
}
