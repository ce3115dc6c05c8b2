//! Tick clock for the game loop.
//!
//! The clock does not own a thread or an OS timer. The host feeds it elapsed
//! wall time through [`GameClock::update`] and asks it how long to sleep via
//! [`GameClock::time_until_next_tick`]; the clock decides when a tick is due.
//! That keeps it deterministic under test and lets a single-threaded loop
//! interleave input polling with ticking.

/// Clock lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running { period_ms: u32 },
    Paused { period_ms: u32 },
}

/// A fired tick.
///
/// `generation` identifies the arming of the clock that produced it; ticks
/// from an earlier generation (before a stop or restart) must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    pub generation: u32,
    /// 1-based tick number within the generation.
    pub seq: u64,
}

#[derive(Debug, Clone)]
pub struct GameClock {
    state: ClockState,
    /// Time accumulated towards the next tick.
    elapsed_ms: u32,
    generation: u32,
    fired: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            state: ClockState::Stopped,
            elapsed_ms: 0,
            generation: 0,
            fired: 0,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, ClockState::Paused { .. })
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ClockState::Stopped
    }

    /// Current firing period, if the clock is armed.
    pub fn period_ms(&self) -> Option<u32> {
        match self.state {
            ClockState::Running { period_ms } | ClockState::Paused { period_ms } => Some(period_ms),
            ClockState::Stopped => None,
        }
    }

    /// Arm the clock with a new generation.
    ///
    /// Any previous generation is invalidated first, so two tick streams can
    /// never drive the same game.
    pub fn start(&mut self, period_ms: u32) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.state = ClockState::Running {
            period_ms: period_ms.max(1),
        };
        self.elapsed_ms = 0;
        self.fired = 0;
        self.generation
    }

    /// Running -> Paused. Returns whether the state changed.
    pub fn pause(&mut self) -> bool {
        match self.state {
            ClockState::Running { period_ms } => {
                self.state = ClockState::Paused { period_ms };
                true
            }
            _ => false,
        }
    }

    /// Paused -> Running at the period in effect when paused.
    ///
    /// The interval restarts from zero.
    pub fn resume(&mut self) -> bool {
        match self.state {
            ClockState::Paused { period_ms } => {
                self.state = ClockState::Running { period_ms };
                self.elapsed_ms = 0;
                true
            }
            _ => false,
        }
    }

    /// Change the period for subsequent ticks. Only valid while running.
    pub fn reschedule(&mut self, period_ms: u32) -> bool {
        match self.state {
            ClockState::Running { .. } => {
                self.state = ClockState::Running {
                    period_ms: period_ms.max(1),
                };
                true
            }
            _ => false,
        }
    }

    /// Any state -> Stopped. Pending ticks of the current generation become stale.
    pub fn stop(&mut self) {
        if self.state != ClockState::Stopped {
            self.generation = self.generation.wrapping_add(1);
        }
        self.state = ClockState::Stopped;
        self.elapsed_ms = 0;
    }

    /// Whether `tick` belongs to the live generation of a running clock.
    pub fn is_current(&self, tick: ClockTick) -> bool {
        self.is_running() && tick.generation == self.generation
    }

    /// Advance wall time. Fires at most one tick per call.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<ClockTick> {
        let ClockState::Running { period_ms } = self.state else {
            return None;
        };

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < period_ms {
            return None;
        }

        self.elapsed_ms = 0;
        self.fired += 1;
        Some(ClockTick {
            generation: self.generation,
            seq: self.fired,
        })
    }

    /// Milliseconds until the next tick is due, or `None` when not running.
    pub fn time_until_next_tick(&self) -> Option<u32> {
        match self.state {
            ClockState::Running { period_ms } => Some(period_ms.saturating_sub(self.elapsed_ms)),
            _ => None,
        }
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}
