//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any rendering code. It turns
//! whatever a terminal backend delivers (crossterm key events, or raw bytes
//! from a byte-oriented console) into a platform-independent [`Key`], and maps
//! keys into [`Intent`]s the game understands.
//!
//! [`Key`]: crate::types::Key
//! [`Intent`]: crate::types::Intent

pub mod map;
pub mod raw;

pub use tui_snake_types as types;

pub use map::{key_from_event, map_key, map_key_event};
pub use raw::decode;
