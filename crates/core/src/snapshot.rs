//! Plain-data copy of a [`GameState`] for drawing and inspection.

use crate::game_state::GameState;
use crate::types::{Cell, Direction, GameOverReason, DEFAULT_GRID_SIZE, INITIAL_TICK_MS};

/// Read-only view of a game for renderers and observers.
///
/// `snake` is reused across frames by [`GameState::snapshot_into`], so a
/// long-lived snapshot does not reallocate every tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid_size: u16,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub tick_period_ms: u32,
    pub paused: bool,
    pub terminal: bool,
    pub game_over_reason: Option<GameOverReason>,
    pub episode_id: u32,
    pub tick_count: u64,
}

impl GameSnapshot {
    /// Reset to the default snapshot, keeping the snake buffer's capacity.
    pub fn clear(&mut self) {
        let mut snake = std::mem::take(&mut self.snake);
        snake.clear();
        *self = Self {
            snake,
            ..Self::default()
        };
    }

    pub fn playable(&self) -> bool {
        !self.terminal && !self.paused
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snake: Vec::new(),
            food: None,
            direction: Direction::Right,
            score: 0,
            tick_period_ms: INITIAL_TICK_MS,
            paused: false,
            terminal: false,
            game_over_reason: None,
            episode_id: 0,
            tick_count: 0,
        }
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        state.snapshot()
    }
}
