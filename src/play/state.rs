//! Agent position and move validation.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction};
use crate::grid::Grid;

/// The single agent walking a maze.
///
/// Only [`PlayState::attempt_move`] changes the position, and only through
/// an open passage, so the agent never leaves the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayState {
    position: Cell,
    previous: Cell,
    moves: u64,
}

impl Default for PlayState {
    fn default() -> Self {
        Self::at(Cell::ORIGIN)
    }
}

impl PlayState {
    /// Agent at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Agent at `cell`. The caller is responsible for `cell` being on the grid.
    #[must_use]
    pub fn at(cell: Cell) -> Self {
        Self {
            position: cell,
            previous: cell,
            moves: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Position before the last successful move.
    ///
    /// Equal to `position()` until the first move. Renderers use it to
    /// redraw only the two affected cells.
    #[must_use]
    pub fn previous_position(&self) -> Cell {
        self.previous
    }

    /// Number of successful moves.
    #[must_use]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Move one cell in `direction` if the current cell has a passage there.
    ///
    /// Returns `true` if the agent moved. A rejected move changes nothing.
    pub fn attempt_move(&mut self, grid: &Grid, direction: Direction) -> bool {
        if !grid.has_passage(self.position, direction) {
            trace!("move {} blocked at {}", direction, self.position);
            return false;
        }
        // A passage bit never points off the grid.
        let Some(next) = self.position.step(direction, grid.size()) else {
            return false;
        };
        self.previous = self.position;
        self.position = next;
        self.moves = self.moves.saturating_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        // (0,0) - (1,0) - (2,0), rest walled off.
        let mut grid = Grid::new(3);
        grid.carve(Cell::new(0, 0), Direction::Right);
        grid.carve(Cell::new(1, 0), Direction::Right);
        grid
    }

    #[test]
    fn test_starts_at_origin() {
        let state = PlayState::new();
        assert_eq!(state.position(), Cell::ORIGIN);
        assert_eq!(state.previous_position(), Cell::ORIGIN);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn test_move_through_passage() {
        let grid = corridor();
        let mut state = PlayState::new();

        assert!(state.attempt_move(&grid, Direction::Right));
        assert_eq!(state.position(), Cell::new(1, 0));
        assert_eq!(state.previous_position(), Cell::ORIGIN);

        assert!(state.attempt_move(&grid, Direction::Right));
        assert_eq!(state.position(), Cell::new(2, 0));
        assert_eq!(state.previous_position(), Cell::new(1, 0));
        assert_eq!(state.moves(), 2);

        assert!(state.attempt_move(&grid, Direction::Left));
        assert_eq!(state.position(), Cell::new(1, 0));
    }

    #[test]
    fn test_wall_rejects_move() {
        let grid = corridor();
        let mut state = PlayState::at(Cell::new(1, 0));
        let before = state;

        assert!(!state.attempt_move(&grid, Direction::Down));
        assert!(!state.attempt_move(&grid, Direction::Up));
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_count_saturates() {
        let grid = corridor();
        let mut state = PlayState {
            moves: u64::MAX,
            ..PlayState::new()
        };

        assert!(state.attempt_move(&grid, Direction::Right));
        assert_eq!(state.position(), Cell::new(1, 0));
        assert_eq!(state.moves(), u64::MAX);
    }

    #[test]
    fn test_origin_boundaries() {
        let grid = corridor();
        let mut state = PlayState::new();
        assert!(!state.attempt_move(&grid, Direction::Left));
        assert!(!state.attempt_move(&grid, Direction::Up));
        assert_eq!(state.position(), Cell::ORIGIN);
    }
}
