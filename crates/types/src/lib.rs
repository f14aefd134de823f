//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input decoding, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 30 x 20 grid of cells:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Origin**: (0, 0) is the top-left cell, y grows downwards
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 120 | Fixed interval between simulation steps |
//!
//! The tick interval is not adaptive: a slow frame stretches the game rather
//! than being compensated for.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameConfig, Position, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert!(!Direction::Up.is_opposite(Direction::Left));
//!
//! let head = Position::new(15, 10);
//! assert_eq!(head.step(Direction::Right), Position::new(16, 10));
//!
//! let config = GameConfig::default();
//! assert_eq!(config.width(), GRID_WIDTH);
//! assert_eq!(config.height(), GRID_HEIGHT);
//! ```

use std::time::Duration;

/// Grid width in cells (30 columns)
pub const GRID_WIDTH: i32 = 30;
/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: i32 = 20;

/// Simulation step interval in milliseconds
pub const TICK_MS: u64 = 120;

/// Largest accepted grid side. Keeps the bordered frame within `u16` columns.
pub const MAX_GRID_SIDE: i32 = 1000;

/// A grid cell. Equality is value equality on both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The reverse heading (Up <-> Down, Left <-> Right)
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step as (dx, dy). Rows grow downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Platform-independent key code produced by a terminal driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character, case preserved.
    Char(char),
    /// A dedicated arrow key.
    Arrow(Direction),
    /// Ctrl+C. Raw mode delivers it in-band instead of raising a signal.
    Interrupt,
    /// Anything else the driver saw but does not classify.
    Other,
}

/// Abstract player intent derived from a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    SetDirection(Direction),
    Quit,
    /// Only acted upon while the game is over.
    Restart,
    NoOp,
}

/// Fixed game parameters.
///
/// Fields are private so every config goes through the bounds check in
/// [`GameConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: i32,
    height: i32,
    tick: Duration,
}

impl GameConfig {
    /// Build a config, rejecting grids that cannot hold the starting snake.
    ///
    /// The tail spawns one cell left of the centre column, so at least two
    /// columns and one row are required. Neither side may exceed
    /// [`MAX_GRID_SIDE`].
    pub fn new(width: i32, height: i32, tick: Duration) -> Option<Self> {
        if !(2..=MAX_GRID_SIDE).contains(&width) || !(1..=MAX_GRID_SIDE).contains(&height) {
            return None;
        }
        Some(Self {
            width,
            height,
            tick,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            tick: Duration::from_millis(TICK_MS),
        }
    }
}
