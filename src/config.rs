//! Runner configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::engine::SessionConfig;
use crate::scores::ScoresConfig;
use crate::types::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeConfig {
    pub grid_size: u16,
    pub seed: u32,
    /// `None` means ask on stdin before the game starts.
    pub player: Option<String>,
    pub log_path: Option<PathBuf>,
    pub scores: ScoresConfig,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: 1,
            player: None,
            log_path: None,
            scores: ScoresConfig::default(),
        }
    }
}

impl SnakeConfig {
    /// Create from environment variables
    ///
    /// - `SNAKE_GRID_SIZE`: grid dimension, clamped to the supported range
    /// - `SNAKE_SEED`: RNG seed (default: derived from the clock)
    /// - `SNAKE_PLAYER`: player name (default: prompt)
    /// - `SNAKE_LOG_PATH`: log file (default: logging off)
    /// - `SNAKE_SCORES_PATH` / `SNAKE_SCORES_DISABLED`: see [`ScoresConfig::from_env`]
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let grid_size = env::var("SNAKE_GRID_SIZE")
            .ok()
            .and_then(|s| parse_grid_size(&s))
            .unwrap_or(DEFAULT_GRID_SIZE);

        let seed = env::var("SNAKE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let player = env::var("SNAKE_PLAYER").ok().and_then(non_blank);

        let log_path = env::var("SNAKE_LOG_PATH")
            .ok()
            .and_then(non_blank)
            .map(PathBuf::from);

        Self {
            grid_size,
            seed,
            player,
            log_path,
            scores: ScoresConfig::from_env(),
        }
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            grid_size: self.grid_size,
            seed: self.seed,
        }
    }
}

/// Parse and clamp a grid size. `None` if `s` is not a number.
pub fn parse_grid_size(s: &str) -> Option<u16> {
    let n: u32 = s.trim().parse().ok()?;
    Some(n.clamp(MIN_GRID_SIZE as u32, MAX_GRID_SIZE as u32) as u16)
}

fn non_blank(s: String) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_nanos() as u32) ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
