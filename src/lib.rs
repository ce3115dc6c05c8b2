//! Terminal snake (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `tui_snake::{core,engine,input,scores,term,types}` and adds the
//! runner's configuration, logging and leaderboard subcommand.

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_scores as scores;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod config;
pub mod leaderboard;
pub mod logging;
