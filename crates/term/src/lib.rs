//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented terminal layer. It renders into a simple
//! character framebuffer and owns the terminal through a [`TerminalDriver`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Repaint whole frames from the home position, never incrementally
//! - Keep platform specifics behind one driver trait

pub mod driver;
pub mod fb;
pub mod game_view;
pub mod memory;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use driver::{CrosstermDriver, TerminalDriver};
pub use fb::FrameBuffer;
pub use game_view::{status_line, GameView, Glyphs, CONTROLS_HINT, GAME_OVER_HINT};
pub use memory::MemoryDriver;
pub use renderer::{encode_clear_into, encode_frame_into, encode_home_into, encode_line_into};
