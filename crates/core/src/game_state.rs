//! Game state module - manages the complete game state
//!
//! This module ties together the snake body, heading, food and scoring.
//! It handles the fixed-step movement rule, collisions, and the game lifecycle
//! (reset, game over, restart).

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::food::random_free_cell;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameConfig, Intent, Position};

/// Result of a single [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed.
    Frozen,
    /// The snake advanced one cell without eating.
    Moved,
    /// The snake ate and grew by one cell.
    Ate,
    /// The next head was outside the grid. The snake did not move.
    HitWall,
    /// The new head overlapped the body.
    HitSelf,
    /// Food was eaten but no free cell was left to place the next one.
    BoardFull,
}

impl TickOutcome {
    pub fn ends_game(&self) -> bool {
        matches!(
            self,
            TickOutcome::HitWall | TickOutcome::HitSelf | TickOutcome::BoardFull
        )
    }
}

/// Effect of an [`Intent`] on the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    PendingChanged,
    Restarted,
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SmallRng> {
    config: GameConfig,
    /// Front is the head, back is the tail.
    snake: VecDeque<Position>,
    direction: Direction,
    /// Most recent requested turn, committed at the start of the next tick.
    pending: Direction,
    /// `None` only when the board is completely covered.
    food: Option<Position>,
    score: u32,
    game_over: bool,
    rng: R,
}

impl<R: Rng> GameState<R> {
    /// Create a new game in its reset state, owning `rng` for food placement.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut state = Self {
            config,
            snake: VecDeque::with_capacity(config.cell_count()),
            direction: Direction::Right,
            pending: Direction::Right,
            food: None,
            score: 0,
            game_over: false,
            rng,
        };
        state.reset();
        state
    }

    /// Put the game back to its starting configuration.
    ///
    /// The snake is two cells long, head at the grid centre and tail to its
    /// left, heading right. Only the food position depends on the RNG.
    pub fn reset(&mut self) {
        let cx = self.config.width() / 2;
        let cy = self.config.height() / 2;

        self.snake.clear();
        self.snake.push_back(Position::new(cx, cy));
        self.snake.push_back(Position::new(cx - 1, cy));
        self.direction = Direction::Right;
        self.pending = Direction::Right;
        self.score = 0;
        self.game_over = false;
        self.food = random_free_cell(&mut self.rng, &self.config, &self.snake);
    }

    /// Record a requested turn. It is applied (or dropped as a reversal) on the next tick.
    pub fn set_pending(&mut self, dir: Direction) {
        self.pending = dir;
    }

    /// Apply a player intent.
    ///
    /// Restart is only honoured while the game is over. Quit is a loop-level
    /// concern and is ignored here.
    pub fn apply_intent(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::SetDirection(dir) => {
                self.set_pending(dir);
                IntentOutcome::PendingChanged
            }
            Intent::Restart if self.game_over => {
                self.reset();
                IntentOutcome::Restarted
            }
            Intent::Restart | Intent::Quit | Intent::NoOp => IntentOutcome::Ignored,
        }
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Frozen;
        }

        // A 180 degree turn would run straight through the neck.
        if !self.pending.is_opposite(self.direction) {
            self.direction = self.pending;
        }

        let Some(head) = self.head() else {
            return TickOutcome::Frozen;
        };
        let new_head = head.step(self.direction);

        if !self.config.contains(new_head) {
            self.game_over = true;
            return TickOutcome::HitWall;
        }

        self.snake.push_front(new_head);

        let mut outcome = TickOutcome::Moved;
        if self.food == Some(new_head) {
            self.score += 1;
            self.food = random_free_cell(&mut self.rng, &self.config, &self.snake);
            outcome = if self.food.is_some() {
                TickOutcome::Ate
            } else {
                self.game_over = true;
                TickOutcome::BoardFull
            };
        } else {
            self.snake.pop_back();
        }

        // Checked against the final body, so chasing the tail is legal.
        if self.snake.iter().skip(1).any(|p| *p == new_head) {
            self.game_over = true;
            return TickOutcome::HitSelf;
        }

        outcome
    }

    /// Replace the snake body and heading.
    ///
    /// Intended for scenario setup (tests, benches). The first element is the
    /// head. Food is moved off the new body if it now overlaps it.
    pub fn place_snake<I>(&mut self, body: I, dir: Direction)
    where
        I: IntoIterator<Item = Position>,
    {
        self.snake.clear();
        self.snake.extend(body);
        self.direction = dir;
        self.pending = dir;
        if self.food.map_or(true, |f| self.snake.contains(&f)) {
            self.food = random_free_cell(&mut self.rng, &self.config, &self.snake);
        }
    }

    /// Move the food to a specific cell (scenario setup).
    pub fn place_food(&mut self, pos: Option<Position>) {
        self.food = pos;
    }
}

impl<R> GameState<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.front().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Borrowed read-only view for rendering.
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            width: self.config.width(),
            height: self.config.height(),
            snake: &self.snake,
            food: self.food,
            score: self.score,
            game_over: self.game_over,
        }
    }
}
