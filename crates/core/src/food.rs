//! Food placement - uniform random choice of a free grid cell
//!
//! Placement draws cells uniformly over the whole grid and rejects any draw
//! that lands on the snake. Rejection sampling degrades badly on a nearly
//! full board, so the number of draws is capped; past the cap the free cells
//! are enumerated and one is picked uniformly from that list. A full board
//! yields `None`.
//!
//! The generator is always passed in by the caller. There is no process-wide
//! RNG state in this crate.

use rand::Rng;

use crate::types::{GameConfig, Position};

/// Rejection-sampling draws allowed per grid cell before falling back to a scan.
pub const REJECTION_DRAWS_PER_CELL: usize = 4;

/// Pick a uniformly random cell not contained in `occupied`.
pub fn random_free_cell<'a, R, I>(rng: &mut R, config: &GameConfig, occupied: I) -> Option<Position>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Position>,
    I::IntoIter: Clone,
{
    let occupied = occupied.into_iter();
    let max_draws = config.cell_count() * REJECTION_DRAWS_PER_CELL;

    for _ in 0..max_draws {
        let p = Position::new(
            rng.gen_range(0..config.width()),
            rng.gen_range(0..config.height()),
        );
        if !occupied.clone().any(|s| *s == p) {
            return Some(p);
        }
    }

    let free = free_cells(config, occupied);
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}

/// All cells not covered by `occupied`, in row-major order.
pub fn free_cells<'a, I>(config: &GameConfig, occupied: I) -> Vec<Position>
where
    I: IntoIterator<Item = &'a Position>,
{
    let w = config.width() as usize;
    let mut taken = vec![false; config.cell_count()];
    for p in occupied {
        if config.contains(*p) {
            taken[(p.y as usize) * w + (p.x as usize)] = true;
        }
    }

    taken
        .iter()
        .enumerate()
        .filter(|(_, t)| !**t)
        .map(|(i, _)| Position::new((i % w) as i32, (i / w) as i32))
        .collect()
}
