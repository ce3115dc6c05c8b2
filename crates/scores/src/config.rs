//! Score store configuration from the environment.

use std::path::PathBuf;

use tracing::info;

use crate::error::ScoreError;
use crate::file_store::JsonFileStore;
use crate::memory::MemoryStore;
use crate::store::ScoreStore;

/// Default leaderboard file, relative to the working directory.
pub const DEFAULT_SCORES_PATH: &str = "snake_scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoresConfig {
    pub path: PathBuf,
    /// Keep scores in memory only.
    pub disabled: bool,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SCORES_PATH),
            disabled: false,
        }
    }
}

impl ScoresConfig {
    /// Create from environment variables
    ///
    /// - `SNAKE_SCORES_PATH`: leaderboard file (default `snake_scores.json`)
    /// - `SNAKE_SCORES_DISABLED`: `1` or `true` keeps scores in memory only
    pub fn from_env() -> Self {
        use std::env;

        let path = env::var("SNAKE_SCORES_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH));

        let disabled = env::var("SNAKE_SCORES_DISABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { path, disabled }
    }

    /// Open the configured store.
    pub fn open(&self) -> Result<Box<dyn ScoreStore>, ScoreError> {
        if self.disabled {
            info!("score persistence disabled; keeping scores in memory");
            return Ok(Box::new(MemoryStore::new()));
        }
        Ok(Box::new(JsonFileStore::open(&self.path)?))
    }
}

fn parse_flag(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}
