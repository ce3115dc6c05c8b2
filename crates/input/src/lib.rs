//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]; buffering and
//! reversal rejection happen later, in the core's direction controller.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, is_confirm, should_quit};
