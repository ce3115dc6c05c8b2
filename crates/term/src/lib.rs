//! Terminal rendering for the snake game.
//!
//! A small game-oriented layer: [`GameView`] draws a [`core::GameSnapshot`]
//! plus a [`Hud`] into a [`FrameBuffer`], and [`TerminalRenderer`] flushes
//! that buffer to the terminal, rewriting only what changed since the last
//! frame. No widget toolkit is involved, which keeps precise control over
//! the cell aspect ratio (two columns per grid cell by default).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_scores as scores;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
