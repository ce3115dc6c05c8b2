//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, score persistence).
//!
//! # Coordinates
//!
//! The playfield is an `N x N` grid of cells (default 20x20):
//!
//! - **x** grows to the right, **y** grows downward (screen coordinates)
//! - Moving [`Direction::Up`] decrements `y`
//! - The snake spawns at the grid center `(N / 2, N / 2)`
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TICK_MS` | 150 | Tick period of a fresh game |
//! | `TICK_STEP_MS` | 5 | Period reduction per food eaten |
//! | `MIN_TICK_MS` | 50 | Fastest allowed tick period |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GameAction, DEFAULT_GRID_SIZE};
//!
//! let head = Cell::new(10, 10);
//! assert_eq!(head.step(Direction::Up), Cell::new(10, 9));
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Turn(Direction::Up)));
//! assert!(head.in_bounds(DEFAULT_GRID_SIZE));
//! ```

/// Default grid dimension (20x20 cells)
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid accepted by configuration
pub const MIN_GRID_SIZE: u16 = 5;

/// Largest grid accepted by configuration
pub const MAX_GRID_SIZE: u16 = 60;

/// Tick period of a freshly started game (150ms)
pub const INITIAL_TICK_MS: u32 = 150;

/// Lower bound of the tick period (50ms)
pub const MIN_TICK_MS: u32 = 50;

/// Tick period reduction applied on every growth tick (5ms)
pub const TICK_STEP_MS: u32 = 5;

/// Points awarded per food eaten
pub const FOOD_SCORE: u32 = 10;

/// Number of entries shown on the leaderboard
pub const LEADERBOARD_LIMIT: usize = 10;

/// How long a score-save status message stays visible (3s)
pub const STATUS_MESSAGE_MS: u32 = 3000;


/// A cell on the playfield
///
/// Coordinates are signed so that a candidate head one step past the wall
/// (e.g. `x = -1`) is representable and can be rejected by [`Cell::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies inside `[0, n) x [0, n)`.
    pub fn in_bounds(self, n: u16) -> bool {
        let n = n as i16;
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }

    /// Row-major index into an `n x n` grid. Only meaningful for in-bounds cells.
    pub fn index(self, n: u16) -> usize {
        (self.y as usize) * (n as usize) + (self.x as usize)
    }

    /// Inverse of [`Cell::index`].
    pub fn from_index(i: usize, n: u16) -> Self {
        let n = n as usize;
        Self {
            x: (i % n) as i16,
            y: (i / n) as i16,
        }
    }
}

/// Movement direction of the snake
///
/// - **Up**: `y - 1`
/// - **Down**: `y + 1`
/// - **Left**: `x - 1`
/// - **Right**: `x + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` for one step in this direction
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The geometrically opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands accepted by a running game session
///
/// This is the complete command surface of the engine; terminal keys and
/// tests both go through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a new movement direction (reversals are ignored)
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Throw the current game away and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Turn(Direction::Left)));
    /// assert_eq!(GameAction::from_str("PAUSE"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Turn(d) => d.as_str(),
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The head left the grid
    HitWall,
    /// The head ran into the snake's own body
    HitSelf,
    /// The snake covers every cell; nowhere left to place food
    BoardFull,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::HitWall => "wall",
            GameOverReason::HitSelf => "self",
            GameOverReason::BoardFull => "board_full",
        }
    }
}
