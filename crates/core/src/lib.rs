//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal I/O, timers, or persistence, making it:
//!
//! - **Deterministic**: Same seed produces identical games (food placement included)
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: Complete game state and the pure [`advance`] tick function
//! - [`snake`]: Head-first snake body with collision queries
//! - [`direction`]: Buffered direction input with reversal rejection
//! - [`food`]: Food placement off the snake body
//! - [`rng`]: Seeded LCG used for food placement
//! - [`snapshot`]: Read-only view consumed by renderers
//!
//! # Game Rules
//!
//! - **Movement**: the head moves one cell per tick; the tail follows
//! - **Walls**: leaving the grid ends the game
//! - **Self**: running into the body ends the game (the cell the tail is leaving is free)
//! - **Food**: eating grows the snake by one, scores 10 and shortens the tick period by 5ms (floor 50ms)
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{advance, DirectionController, GameState};
//! use tui_snake_types::Direction;
//!
//! let mut game = GameState::new(20, 12345);
//! let mut input = DirectionController::new(game.direction());
//!
//! input.set_direction(Direction::Up);
//! game.set_direction(input.next_direction());
//! let game = advance(&game);
//!
//! assert_eq!(game.snake().head().y, 9);
//! assert!(!game.terminal());
//! ```

pub mod direction;
pub mod food;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use direction::{DirectionController, INPUT_QUEUE_CAPACITY};
pub use food::FoodPlacer;
pub use game_state::{advance, next_tick_period, GameState, TickEvent};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
