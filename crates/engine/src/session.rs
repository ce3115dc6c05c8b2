//! A running game: state, buffered input and the tick clock in one place.
//!
//! The session is the only owner of the [`GameState`]. Inputs go through
//! [`Session::apply_action`]; time goes through [`Session::update`]. Each fired
//! tick reads the buffered direction once, runs [`advance`], and then either
//! stops the clock (game over) or reschedules it at the new period.

use tracing::{debug, info};

use crate::clock::{ClockTick, GameClock};
use crate::core::{advance, DirectionController, GameSnapshot, GameState, TickEvent};
use crate::types::{GameAction, DEFAULT_GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_size: u16,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    input: DirectionController,
    clock: GameClock,
    /// Seq of the last tick processed in the current clock generation.
    last_seq: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_state(GameState::new(config.grid_size, config.seed))
    }

    /// Wrap an existing state (e.g. a scripted layout). The clock is not started.
    pub fn from_state(state: GameState) -> Self {
        let input = DirectionController::new(state.direction());
        Self {
            state,
            input,
            clock: GameClock::new(),
            last_seq: 0,
        }
    }

    /// Arm the clock at the game's current period.
    ///
    /// No-op if the clock is already armed or the game is over.
    pub fn start(&mut self) {
        if !self.clock.is_stopped() || self.state.terminal() {
            return;
        }
        let generation = self.clock.start(self.state.tick_period_ms());
        self.last_seq = 0;
        if self.state.paused() {
            self.clock.pause();
        }
        info!(
            episode = self.state.episode_id(),
            generation,
            grid = self.state.grid_size(),
            "game started"
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn input(&self) -> &DirectionController {
        &self.input
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    /// Apply a command. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => {
                if !self.state.playable() {
                    return false;
                }
                self.input.set_direction(direction)
            }
            GameAction::Pause => {
                if self.state.paused() {
                    self.resume()
                } else {
                    self.pause()
                }
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Pause the game. Idempotent; ignored once the game is over.
    pub fn pause(&mut self) -> bool {
        if !self.state.playable() {
            return false;
        }
        self.state.set_paused(true);
        self.clock.pause();
        debug!(tick = self.state.tick_count(), "paused");
        true
    }

    /// Resume a paused game at its current speed.
    pub fn resume(&mut self) -> bool {
        if !self.state.paused() {
            return false;
        }
        self.state.set_paused(false);
        self.clock.resume();
        debug!(tick = self.state.tick_count(), "resumed");
        true
    }

    /// Replace the game with a fresh one.
    ///
    /// The old clock generation is stopped before the new one is armed.
    pub fn restart(&mut self) {
        self.clock.stop();
        self.state = self.state.restarted();
        self.input.reset(self.state.direction());
        self.start();
    }

    /// Feed elapsed wall time. Returns whether a tick was processed.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        match self.clock.update(elapsed_ms) {
            Some(tick) => self.handle_tick(tick),
            None => false,
        }
    }

    /// Process one fired tick.
    ///
    /// Ticks from a stale clock generation, and ticks already processed, are dropped.
    pub fn handle_tick(&mut self, tick: ClockTick) -> bool {
        if !self.clock.is_current(tick) {
            debug!(
                tick_generation = tick.generation,
                generation = self.clock.generation(),
                "dropping stale tick"
            );
            return false;
        }
        if tick.seq <= self.last_seq {
            debug!(seq = tick.seq, last_seq = self.last_seq, "dropping repeated tick");
            return false;
        }
        self.last_seq = tick.seq;
        if !self.state.playable() {
            return false;
        }

        let direction = self.input.next_direction();
        self.state.set_direction(direction);
        self.state = advance(&self.state);

        match self.state.last_event() {
            Some(TickEvent::Died(reason)) => {
                self.clock.stop();
                info!(
                    episode = self.state.episode_id(),
                    score = self.state.score(),
                    length = self.state.snake().len(),
                    ticks = self.state.tick_count(),
                    reason = reason.as_str(),
                    "game over"
                );
            }
            Some(TickEvent::Grew {
                score,
                tick_period_ms,
            }) => {
                self.clock.reschedule(tick_period_ms);
                debug!(score, tick_period_ms, "food eaten");
            }
            Some(TickEvent::Moved) | None => {}
        }
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockState;
    use crate::core::Snake;
    use crate::types::{Cell, Direction, GameOverReason, INITIAL_TICK_MS};

    fn scripted(cells: &[(i16, i16)], food: (i16, i16), direction: Direction) -> Session {
        let cells: Vec<Cell> = cells.iter().map(|&(x, y)| Cell::new(x, y)).collect();
        let state = GameState::with_layout(
            20,
            Snake::from_cells(&cells).unwrap(),
            Some(Cell::new(food.0, food.1)),
            direction,
            1,
        )
        .unwrap();
        let mut session = Session::from_state(state);
        session.start();
        session
    }

    #[test]
    fn test_start_arms_clock() {
        let mut s = Session::default();
        assert!(s.clock().is_stopped());
        s.start();
        assert_eq!(
            s.clock().state(),
            ClockState::Running {
                period_ms: INITIAL_TICK_MS
            }
        );
    }

    #[test]
    fn test_tick_fires_after_period() {
        let mut s = Session::default();
        s.start();
        assert!(!s.update(149));
        assert!(s.update(1));
        assert_eq!(s.state().snake().head(), Cell::new(11, 10));
    }

    #[test]
    fn test_growth_reschedules_clock() {
        let mut s = scripted(&[(10, 10)], (11, 10), Direction::Right);
        assert!(s.update(150));
        assert_eq!(s.state().score(), 10);
        assert_eq!(s.state().tick_period_ms(), 145);
        assert_eq!(s.clock().period_ms(), Some(145));
    }

    #[test]
    fn test_game_over_stops_clock() {
        let mut s = scripted(&[(0, 5)], (10, 10), Direction::Left);
        assert!(s.update(150));
        assert!(s.state().terminal());
        assert_eq!(s.state().game_over_reason(), Some(GameOverReason::HitWall));
        assert!(s.clock().is_stopped());
        assert!(!s.update(10_000));
    }

    #[test]
    fn test_turn_is_read_once_per_tick() {
        let mut s = Session::default();
        s.start();
        assert!(s.apply_action(GameAction::Turn(Direction::Up)));
        assert!(!s.apply_action(GameAction::Turn(Direction::Down)));
        s.update(150);
        assert_eq!(s.state().direction(), Direction::Up);
        assert_eq!(s.state().snake().head(), Cell::new(10, 9));
    }

    #[test]
    fn test_pause_toggle() {
        let mut s = Session::default();
        s.start();
        assert!(s.apply_action(GameAction::Pause));
        assert!(s.state().paused());
        assert!(s.clock().is_paused());
        assert!(!s.update(10_000));

        assert!(s.apply_action(GameAction::Pause));
        assert!(!s.state().paused());
        assert!(s.clock().is_running());
    }

    #[test]
    fn test_pause_twice_equals_once() {
        let mut s = Session::default();
        s.start();
        assert!(s.pause());
        let clock_state = s.clock().state();
        assert!(!s.pause());
        assert!(s.state().paused());
        assert_eq!(s.clock().state(), clock_state);
    }

    #[test]
    fn test_pause_keeps_pending_turn() {
        let mut s = Session::default();
        s.start();
        s.apply_action(GameAction::Turn(Direction::Down));
        s.apply_action(GameAction::Pause);
        assert_eq!(s.input().effective_direction(), Direction::Down);
        s.apply_action(GameAction::Pause);
        s.update(150);
        assert_eq!(s.state().snake().head(), Cell::new(10, 11));
    }

    #[test]
    fn test_turn_ignored_while_paused() {
        let mut s = Session::default();
        s.start();
        s.pause();
        assert!(!s.apply_action(GameAction::Turn(Direction::Up)));
        assert_eq!(s.input().pending_len(), 0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut s = scripted(&[(10, 10)], (11, 10), Direction::Right);
        s.update(150);
        assert_eq!(s.state().score(), 10);

        assert!(s.apply_action(GameAction::Restart));
        assert_eq!(s.state().score(), 0);
        assert_eq!(s.state().tick_period_ms(), INITIAL_TICK_MS);
        assert_eq!(s.state().episode_id(), 1);
        assert_eq!(s.state().snake().cells(), vec![Cell::new(10, 10)]);
        assert_eq!(s.clock().period_ms(), Some(INITIAL_TICK_MS));
    }

    #[test]
    fn test_restart_drops_stale_ticks() {
        let mut s = Session::default();
        s.start();
        let stale = ClockTick {
            generation: s.clock().generation(),
            seq: 1,
        };
        s.restart();
        let before = s.state().clone();
        assert!(!s.handle_tick(stale));
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn test_same_tick_is_handled_once() {
        let mut s = Session::default();
        s.start();
        let mut clock = s.clock().clone();
        let tick = clock.update(INITIAL_TICK_MS).unwrap();

        assert!(s.handle_tick(tick));
        let after_first = s.state().clone();
        assert!(!s.handle_tick(tick));
        assert_eq!(s.state(), &after_first);
        assert_eq!(s.state().tick_count(), 1);

        // Later ticks of the same generation still go through.
        assert!(s.update(INITIAL_TICK_MS));
        assert_eq!(s.state().tick_count(), 2);
    }

    #[test]
    fn test_seq_restarts_with_new_generation() {
        let mut s = Session::default();
        s.start();
        assert!(s.update(INITIAL_TICK_MS));
        assert!(s.update(INITIAL_TICK_MS));
        s.restart();
        // The new generation fires seq 1 again and it is accepted.
        assert!(s.update(INITIAL_TICK_MS));
        assert_eq!(s.state().tick_count(), 1);
    }

    #[test]
    fn test_restart_from_paused_runs() {
        let mut s = Session::default();
        s.start();
        s.pause();
        s.restart();
        assert!(!s.state().paused());
        assert!(s.clock().is_running());
    }
}
