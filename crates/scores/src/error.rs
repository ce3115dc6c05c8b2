//! Score store errors

use thiserror::Error;

/// Score store errors
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Player name is blank after trimming
    #[error("Player name must not be empty")]
    InvalidName,

    /// Reading or writing the score file failed
    #[error("Score file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The score file exists but does not hold a valid leaderboard
    #[error("Score file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
