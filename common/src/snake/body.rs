use std::collections::{HashSet, VecDeque};

use super::grid::GridConfig;
use super::types::{Cell, DeathReason, Direction};

pub const INITIAL_LENGTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub new_head: Cell,
    pub grows: bool,
    pub collision: Option<DeathReason>,
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Head first. `cells` must not be empty.
    pub fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "Snake body should never be empty");
        Self {
            body: cells.iter().copied().collect(),
            body_set: cells.iter().copied().collect(),
            direction,
            pending_direction: None,
        }
    }

    /// Horizontal segment left of the grid center, heading right.
    pub fn spawn(grid: &GridConfig) -> Self {
        let mid = (grid.size / 2) as i32;
        let cells: Vec<Cell> = (1..=INITIAL_LENGTH as i32)
            .map(|offset| Cell::new(mid - offset, mid))
            .collect();
        Self::from_cells(&cells, Direction::Right)
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn occupies(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    /// Rejects only the exact reversal of the committed direction; the
    /// pending request is never consulted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn commit_direction(&mut self) -> Direction {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.direction
    }

    /// Resolves the next head against the body as it is before the move. The
    /// snake grows when the head lands on `food`, and only then does the tail
    /// count as an obstacle.
    pub fn advance(&self, direction: Direction, grid: &GridConfig, food: Option<Cell>) -> Advance {
        let new_head = grid.normalize(self.head().offset(direction));
        let grows = food == Some(new_head);

        let collision = if !grid.wrap && !grid.in_bounds(new_head) {
            Some(DeathReason::WallCollision)
        } else if self.occupies(&new_head) && (grows || new_head != self.tail()) {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        Advance {
            new_head,
            grows,
            collision,
        }
    }

    pub fn grow(&mut self, new_head: Cell) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    pub fn move_to(&mut self, new_head: Cell) {
        self.grow(new_head);
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        if tail != new_head {
            self.body_set.remove(&tail);
        }
    }
}
