//! Movement directions on the maze grid.
//!
//! Each direction owns one passage bit in a cell's bitmask. The bit layout is
//! fixed so grids stay byte-compatible across versions:
//!
//! | Direction | Bit    |
//! |-----------|--------|
//! | Up        | `1<<0` |
//! | Left      | `1<<1` |
//! | Right     | `1<<2` |
//! | Down      | `1<<3` |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::MazeError;

/// One of the four orthogonal directions.
///
/// `y` grows downward, so `Up` decreases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing back the way we came.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset `(dx, dy)` for a step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Passage bit for this direction.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Up => 1 << 0,
            Direction::Left => 1 << 1,
            Direction::Right => 1 << 2,
            Direction::Down => 1 << 3,
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(MazeError::UnknownDirection(s.to_string())),
        }
    }
}
