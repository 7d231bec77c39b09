//! Grid coordinates.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell coordinate on a square grid.
///
/// `x` is the column and `y` the row, both 0-based. Bounds are not part of
/// the type; they are checked against a grid size where it matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Top-left corner. Generation and play both start here.
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check whether this cell lies on a `size` x `size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// The adjacent cell in `direction`, if it lies on a `size` x `size` grid.
    ///
    /// ```
    /// use labyrinth::core::{Cell, Direction};
    ///
    /// assert_eq!(Cell::ORIGIN.step(Direction::Right, 4), Some(Cell::new(1, 0)));
    /// assert_eq!(Cell::ORIGIN.step(Direction::Up, 4), None);
    /// assert_eq!(Cell::new(3, 3).step(Direction::Down, 4), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Cell> {
        if !self.in_bounds(size) {
            return None;
        }
        let next = match direction {
            Direction::Up => Cell::new(self.x, self.y.checked_sub(1)?),
            Direction::Down => Cell::new(self.x, self.y + 1),
            Direction::Left => Cell::new(self.x.checked_sub(1)?, self.y),
            Direction::Right => Cell::new(self.x + 1, self.y),
        };
        next.in_bounds(size).then_some(next)
    }

    /// Direction from `self` to an orthogonally adjacent `other`.
    ///
    /// Returns `None` unless exactly one coordinate differs, by exactly one.
    #[must_use]
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        if self.x == other.x {
            if other.y + 1 == self.y {
                Some(Direction::Up)
            } else if self.y + 1 == other.y {
                Some(Direction::Down)
            } else {
                None
            }
        } else if self.y == other.y {
            if other.x + 1 == self.x {
                Some(Direction::Left)
            } else if self.x + 1 == other.x {
                Some(Direction::Right)
            } else {
                None
            }
        } else {
            None
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
