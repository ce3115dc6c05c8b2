//! Game engine: drives the pure core with a tick clock.
//!
//! - [`clock`]: `Stopped | Running | Paused` tick clock fed with elapsed time
//! - [`session`]: one running game wired to its clock and input buffer

pub mod clock;
pub mod session;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use clock::{ClockState, ClockTick, GameClock};
pub use session::{Session, SessionConfig};
