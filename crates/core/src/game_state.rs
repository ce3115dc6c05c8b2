//! Game state module - the complete state of one snake game
//!
//! [`GameState`] is a plain value. The only thing that moves the game forward
//! is [`advance`], a pure function from one state to the next; input handlers
//! only touch the direction and the pause flag.

use crate::food::FoodPlacer;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What the most recent [`advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickEvent {
    /// Head moved one cell, tail followed.
    Moved,
    /// Head reached the food; snake grew and sped up.
    Grew { score: u32, tick_period_ms: u32 },
    /// The game ended on this tick.
    Died(GameOverReason),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    grid_size: u16,
    snake: Snake,
    /// `None` only once the snake covers the whole board.
    food: Option<Cell>,
    /// Direction used by the next call to [`advance`].
    direction: Direction,
    score: u32,
    tick_period_ms: u32,
    paused: bool,
    terminal: bool,
    game_over_reason: Option<GameOverReason>,
    rng: SimpleRng,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Number of ticks advanced in this episode.
    tick_count: u64,
    last_event: Option<TickEvent>,
}

impl GameState {
    /// Fresh game: one segment at the grid center heading right, food placed
    /// from `seed`.
    pub fn new(grid_size: u16, seed: u32) -> Self {
        let center = (grid_size / 2) as i16;
        let snake = Snake::new(Cell::new(center, center));
        let mut rng = SimpleRng::new(seed);
        let food = FoodPlacer::new(grid_size).place(&snake, &mut rng);

        Self {
            grid_size,
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            tick_period_ms: INITIAL_TICK_MS,
            paused: false,
            terminal: false,
            game_over_reason: None,
            rng,
            episode_id: 0,
            tick_count: 0,
            last_event: None,
        }
    }

    /// A game with an explicit layout, for scenarios and replays.
    ///
    /// Returns `None` unless the layout could occur in play: a non-empty grid,
    /// every snake cell in bounds, food in bounds and off the snake. Food may
    /// only be absent when the snake covers the whole board.
    pub fn with_layout(
        grid_size: u16,
        snake: Snake,
        food: Option<Cell>,
        direction: Direction,
        seed: u32,
    ) -> Option<Self> {
        if grid_size == 0 || !snake.iter().all(|c| c.in_bounds(grid_size)) {
            return None;
        }
        match food {
            Some(f) if !f.in_bounds(grid_size) || snake.contains(f) => return None,
            None if snake.len() < usize::from(grid_size) * usize::from(grid_size) => return None,
            _ => {}
        }
        Some(Self {
            snake,
            food,
            direction,
            ..Self::new(grid_size, seed)
        })
    }

    /// The game that replaces this one on restart.
    ///
    /// Seeds the new game from the current RNG state so consecutive episodes
    /// differ but stay reproducible.
    pub fn restarted(&self) -> Self {
        let mut next = Self::new(self.grid_size, self.rng.state());
        next.episode_id = self.episode_id.wrapping_add(1);
        next
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_period_ms(&self) -> u32 {
        self.tick_period_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn last_event(&self) -> Option<TickEvent> {
        self.last_event
    }

    pub fn rng(&self) -> SimpleRng {
        self.rng
    }

    /// Set the direction for the next tick.
    ///
    /// Accepts any direction, including the reverse of the current one. On a
    /// snake longer than two cells a reversal runs the head into the neck; on
    /// a two-cell snake the neck is the tail, which moves away, so the head and
    /// tail swap places. Player turns go through [`crate::DirectionController`],
    /// which drops reversals before they get here.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_paused(&mut self, paused: bool) {
        if !self.terminal {
            self.paused = paused;
        }
    }

    pub fn playable(&self) -> bool {
        !self.paused && !self.terminal
    }

    fn end(&mut self, reason: GameOverReason) {
        self.terminal = true;
        self.game_over_reason = Some(reason);
        self.last_event = Some(TickEvent::Died(reason));
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_size = self.grid_size;
        out.snake.clear();
        out.snake.extend(self.snake.iter());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.tick_period_ms = self.tick_period_ms;
        out.paused = self.paused;
        out.terminal = self.terminal;
        out.game_over_reason = self.game_over_reason;
        out.episode_id = self.episode_id;
        out.tick_count = self.tick_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, 1)
    }
}

/// Tick period after one more food: 5ms faster, never below 50ms.
pub fn next_tick_period(period_ms: u32) -> u32 {
    period_ms.saturating_sub(TICK_STEP_MS).max(MIN_TICK_MS)
}

/// Advance the game by one tick.
///
/// Order of checks: wall, then own body, then food. A paused or finished
/// game is returned unchanged.
pub fn advance(state: &GameState) -> GameState {
    let mut next = state.clone();
    if !state.playable() {
        return next;
    }

    next.tick_count = next.tick_count.wrapping_add(1);
    let candidate = state.snake.head().step(state.direction);

    if !candidate.in_bounds(state.grid_size) {
        next.end(GameOverReason::HitWall);
        return next;
    }

    if state.snake.collides_with_body(candidate) {
        next.end(GameOverReason::HitSelf);
        return next;
    }

    if state.food == Some(candidate) {
        next.snake.grow(candidate);
        next.score = next.score.saturating_add(FOOD_SCORE);
        next.tick_period_ms = next_tick_period(state.tick_period_ms);
        next.food = FoodPlacer::new(state.grid_size).place(&next.snake, &mut next.rng);

        if next.food.is_none() {
            next.end(GameOverReason::BoardFull);
        } else {
            next.last_event = Some(TickEvent::Grew {
                score: next.score,
                tick_period_ms: next.tick_period_ms,
            });
        }
        return next;
    }

    next.snake.slide(candidate);
    next.last_event = Some(TickEvent::Moved);
    next
}
