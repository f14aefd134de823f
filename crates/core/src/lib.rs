//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the RNG is owned by the game state, so a seeded
//!   generator reproduces a game exactly
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: runs headless as easily as in a terminal
//!
//! # Module Structure
//!
//! - [`food`]: uniform placement of food on free cells
//! - [`game_state`]: snake, heading, food, score and the per-tick rule
//! - [`snapshot`]: borrowed view handed to renderers
//!
//! # Game Rules
//!
//! - Each tick the pending turn is committed unless it reverses the snake
//! - The head advances one cell; leaving the grid ends the game in place
//! - Eating food scores one point and grows the snake by one cell
//! - Running into the body ends the game (moving into the tail cell is fine)
//! - Once over, ticks do nothing until a restart
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use tui_snake_core::{GameState, TickOutcome};
//! use tui_snake_types::{Direction, GameConfig, Position};
//!
//! let mut game = GameState::new(GameConfig::default(), SmallRng::seed_from_u64(42));
//! assert_eq!(game.head(), Some(Position::new(15, 10)));
//!
//! game.set_pending(Direction::Down);
//! let outcome = game.tick();
//! assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Ate));
//! assert_eq!(game.head(), Some(Position::new(15, 11)));
//! ```

pub mod food;
pub mod game_state;
pub mod snapshot;

pub use tui_snake_types as types;

pub use food::{free_cells, random_free_cell};
pub use game_state::{GameState, IntentOutcome, TickOutcome};
pub use snapshot::GameSnapshot;
