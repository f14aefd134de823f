use std::collections::VecDeque;

use crate::types::Position;

/// Read-only view of everything the renderer needs.
///
/// Borrowed from a [`crate::GameState`]; tests may also build one by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot<'a> {
    pub width: i32,
    pub height: i32,
    /// Front is the head.
    pub snake: &'a VecDeque<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot<'_> {
    pub fn head(&self) -> Option<Position> {
        self.snake.front().copied()
    }

    /// True for body cells, excluding the head.
    pub fn is_body(&self, pos: Position) -> bool {
        self.snake.iter().skip(1).any(|p| *p == pos)
    }
}
