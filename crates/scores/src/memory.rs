//! In-memory score store.
//!
//! Used when persistence is disabled, and as the fallback when the score file
//! cannot be opened.

use tracing::debug;

use crate::error::ScoreError;
use crate::store::{rank, validate_name, ScoreEntry, ScoreStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<ScoreEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreStore for MemoryStore {
    fn submit_score(&mut self, player_name: &str, score: u32) -> Result<(), ScoreError> {
        let player_name = validate_name(player_name)?;
        debug!(player = %player_name, score, "score kept in memory");
        self.entries.push(ScoreEntry { player_name, score });
        Ok(())
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(rank(&self.entries, limit))
    }
}
