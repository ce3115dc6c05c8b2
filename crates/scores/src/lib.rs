//! Score persistence - the leaderboard collaborator of the game.
//!
//! The engine itself never touches scores. After a game ends the host submits
//! `(player_name, score)` to a [`ScoreStore`] and reads back the top entries
//! for display. A failed save is reported to the player and logged; it never
//! affects the game.
//!
//! # Stores
//!
//! - [`JsonFileStore`]: leaderboard kept in a JSON file, rewritten atomically on every submit
//! - [`MemoryStore`]: process-local leaderboard (persistence disabled, tests)
//!
//! # Environment Variables
//!
//! - `SNAKE_SCORES_PATH`: leaderboard file (default: `snake_scores.json`)
//! - `SNAKE_SCORES_DISABLED`: set to "1" or "true" to keep scores in memory only
//!
//! # Example
//!
//! ```
//! use tui_snake_scores::{MemoryStore, ScoreStore};
//!
//! let mut store = MemoryStore::new();
//! store.submit_score("ada", 120).unwrap();
//! store.submit_score("bob", 80).unwrap();
//!
//! let top = store.top_scores(10).unwrap();
//! assert_eq!(top[0].player_name, "ada");
//! assert!(store.submit_score("   ", 10).is_err());
//! ```

pub mod config;
pub mod error;
pub mod file_store;
pub mod memory;
pub mod store;

pub use tui_snake_types as types;

pub use config::{ScoresConfig, DEFAULT_SCORES_PATH};
pub use error::ScoreError;
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{rank, validate_name, ScoreEntry, ScoreStore};
