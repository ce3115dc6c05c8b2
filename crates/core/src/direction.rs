//! Direction input buffering.
//!
//! Key presses arrive at any time between ticks; the engine consumes exactly
//! one direction per tick. The controller keeps a short FIFO of pending turns
//! so that two quick presses (e.g. UP then LEFT while moving RIGHT) land on
//! consecutive ticks instead of the second overwriting the first.

use arrayvec::ArrayVec;

use crate::types::Direction;

/// Maximum number of turns buffered between ticks.
pub const INPUT_QUEUE_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionController {
    /// Direction applied by the most recent tick.
    applied: Direction,
    pending: ArrayVec<Direction, INPUT_QUEUE_CAPACITY>,
}

impl DirectionController {
    pub fn new(initial: Direction) -> Self {
        Self {
            applied: initial,
            pending: ArrayVec::new(),
        }
    }

    /// Buffer a turn request.
    ///
    /// The request is checked against the direction the snake will be moving
    /// when it takes effect: the last pending turn, or the applied direction
    /// when nothing is pending. Reversals and repeats are ignored, as are
    /// requests once the queue is full. Returns whether the request was kept.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        let reference = self.pending.last().copied().unwrap_or(self.applied);
        if requested == reference || requested.is_opposite(reference) {
            return false;
        }
        self.pending.try_push(requested).is_ok()
    }

    /// Direction the next tick will use.
    pub fn effective_direction(&self) -> Direction {
        self.pending.first().copied().unwrap_or(self.applied)
    }

    /// Direction applied by the most recent tick.
    pub fn applied_direction(&self) -> Direction {
        self.applied
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Consume the direction for this tick and record it as applied.
    ///
    /// Call exactly once per tick.
    pub fn next_direction(&mut self) -> Direction {
        while !self.pending.is_empty() {
            let d = self.pending.remove(0);
            if !d.is_opposite(self.applied) {
                self.applied = d;
                break;
            }
        }
        self.applied
    }

    /// Drop pending input and start over from `initial`.
    pub fn reset(&mut self, initial: Direction) {
        self.applied = initial;
        self.pending.clear();
    }
}

impl Default for DirectionController {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_is_rejected() {
        let mut c = DirectionController::new(Direction::Right);
        assert!(!c.set_direction(Direction::Left));
        assert_eq!(c.effective_direction(), Direction::Right);
        assert_eq!(c.next_direction(), Direction::Right);
    }

    #[test]
    fn test_perpendicular_turn_applies_next_tick() {
        let mut c = DirectionController::new(Direction::Right);
        assert!(c.set_direction(Direction::Up));
        assert_eq!(c.applied_direction(), Direction::Right);
        assert_eq!(c.effective_direction(), Direction::Up);
        assert_eq!(c.next_direction(), Direction::Up);
        assert_eq!(c.applied_direction(), Direction::Up);
    }

    #[test]
    fn test_up_then_down_applies_up() {
        let mut c = DirectionController::new(Direction::Right);
        assert!(c.set_direction(Direction::Up));
        assert!(!c.set_direction(Direction::Down));
        assert_eq!(c.next_direction(), Direction::Up);
        // Nothing left queued; keeps going up.
        assert_eq!(c.next_direction(), Direction::Up);
    }

    #[test]
    fn test_double_tap_queues_across_ticks() {
        let mut c = DirectionController::new(Direction::Right);
        assert!(c.set_direction(Direction::Up));
        assert!(c.set_direction(Direction::Left));
        assert_eq!(c.next_direction(), Direction::Up);
        assert_eq!(c.next_direction(), Direction::Left);
        assert_eq!(c.next_direction(), Direction::Left);
    }

    #[test]
    fn test_repeat_is_ignored() {
        let mut c = DirectionController::new(Direction::Right);
        assert!(!c.set_direction(Direction::Right));
        assert!(c.set_direction(Direction::Down));
        assert!(!c.set_direction(Direction::Down));
        assert_eq!(c.pending_len(), 1);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut c = DirectionController::new(Direction::Right);
        assert!(c.set_direction(Direction::Up));
        assert!(c.set_direction(Direction::Left));
        assert!(c.set_direction(Direction::Down));
        assert!(!c.set_direction(Direction::Right));
        assert_eq!(c.pending_len(), INPUT_QUEUE_CAPACITY);
    }

    #[test]
    fn test_reset_clears_pending() {
        let mut c = DirectionController::new(Direction::Up);
        c.set_direction(Direction::Left);
        c.reset(Direction::Right);
        assert_eq!(c.pending_len(), 0);
        assert_eq!(c.effective_direction(), Direction::Right);
    }
}
