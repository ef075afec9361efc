use std::time::Duration;

use crate::SessionRng;
use super::body::Snake;
use super::grid::GridConfig;
use super::types::{Cell, Food};

pub const MAX_SPAWN_ATTEMPTS: usize = 1000;

/// Picks a free cell off the outer ring. After `MAX_SPAWN_ATTEMPTS` misses the
/// grid center is used even if the snake is on it.
pub fn spawn_food(snake: &Snake, grid: &GridConfig, rng: &mut SessionRng, now: Duration) -> Food {
    let max = grid.size as i32 - 2;

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let cell = Cell::new(rng.random_range(1..=max), rng.random_range(1..=max));
        if !snake.occupies(&cell) {
            return Food { cell, spawned_at: now };
        }
    }

    Food {
        cell: grid.center(),
        spawned_at: now,
    }
}
