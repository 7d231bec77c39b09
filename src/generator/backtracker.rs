//! Randomized depth-first backtracking.
//!
//! ## Algorithm
//!
//! Starting from one cell, repeatedly:
//! 1. Look at the cell on top of the stack.
//! 2. Collect its unvisited neighbours. If there are none, pop (backtrack).
//! 3. Otherwise shuffle them, carve toward the first, mark it visited and
//!    push it.
//!
//! A cell stays on the stack until all its neighbours are visited, so once
//! the subtree below one child is exhausted the cell can carve again toward a
//! neighbour that is still unvisited. Walls are only opened toward unvisited
//! cells (no cycles) and the loop ends only when the start's whole connected
//! component is visited (no isolated cells), giving a perfect maze.
//!
//! The explicit stack replaces recursion, whose depth can reach N*N.

use log::debug;

use crate::core::{Cell, MazeRng};
use crate::grid::Grid;

/// Summary of one carving run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Cells marked visited, including the start.
    pub cells_visited: usize,
    /// Passages opened.
    pub passages_carved: usize,
    /// Largest stack depth reached.
    pub max_depth: usize,
}

/// Recursive-backtracker maze generator.
#[derive(Clone, Copy, Debug)]
pub struct MazeGenerator {
    start: Cell,
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self { start: Cell::ORIGIN }
    }
}

impl MazeGenerator {
    /// Generator starting at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the traversal somewhere other than the origin.
    ///
    /// The result is still a spanning tree; only the shape distribution
    /// changes.
    #[must_use]
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Allocate a `size` x `size` grid and carve a maze into it.
    pub fn generate(&self, size: usize, rng: &mut MazeRng) -> Grid {
        let mut grid = Grid::new(size);
        self.carve(&mut grid, rng);
        grid
    }

    /// Carve a maze into `grid`, which should be freshly allocated.
    ///
    /// Cells already marked visited are treated as walls-off and are left
    /// out of the tree. If the start is off the grid nothing happens.
    pub fn carve(&self, grid: &mut Grid, rng: &mut MazeRng) -> CarveStats {
        let mut stats = CarveStats::default();
        if !grid.mark_visited(self.start) {
            return stats;
        }
        stats.cells_visited = 1;

        let mut stack = vec![self.start];
        stats.max_depth = 1;

        while let Some(&current) = stack.last() {
            let mut candidates = grid.unvisited_neighbors(current);
            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            rng.shuffle(&mut candidates);
            let (_, direction) = candidates[0];

            if let Some(next) = grid.carve(current, direction) {
                grid.mark_visited(next);
                stack.push(next);
                stats.cells_visited += 1;
                stats.passages_carved += 1;
                stats.max_depth = stats.max_depth.max(stack.len());
            }
        }

        debug!(
            "carved {}x{} maze from {}: {} cells, {} passages, max depth {}",
            grid.size(),
            grid.size(),
            self.start,
            stats.cells_visited,
            stats.passages_carved,
            stats.max_depth
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::grid::{is_perfect, is_symmetric};

    #[test]
    fn test_generate_perfect() {
        let mut rng = MazeRng::new(42);
        let grid = MazeGenerator::new().generate(10, &mut rng);
        assert!(is_perfect(&grid));
        assert_eq!(grid.passage_count(), 99);
    }

    #[test]
    fn test_stats() {
        let mut rng = MazeRng::new(7);
        let mut grid = Grid::new(6);
        let stats = MazeGenerator::new().carve(&mut grid, &mut rng);

        assert_eq!(stats.cells_visited, 36);
        assert_eq!(stats.passages_carved, 35);
        assert!(stats.max_depth >= 2 && stats.max_depth <= 36);
    }

    #[test]
    fn test_every_cell_visited() {
        let mut rng = MazeRng::new(3);
        let grid = MazeGenerator::new().generate(8, &mut rng);
        assert!(grid.cells().all(|c| grid.is_visited(c)));
    }

    #[test]
    fn test_single_cell() {
        let mut rng = MazeRng::new(1);
        let mut grid = Grid::new(1);
        let stats = MazeGenerator::new().carve(&mut grid, &mut rng);
        assert_eq!(stats, CarveStats { cells_visited: 1, passages_carved: 0, max_depth: 1 });
        assert!(is_perfect(&grid));
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = MazeGenerator::new().generate(12, &mut MazeRng::new(99));
        let b = MazeGenerator::new().generate(12, &mut MazeRng::new(99));
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = MazeGenerator::new().generate(12, &mut MazeRng::new(1));
        let b = MazeGenerator::new().generate(12, &mut MazeRng::new(2));
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_custom_start() {
        let mut rng = MazeRng::new(5);
        let generator = MazeGenerator::new().with_start(Cell::new(3, 2));
        let grid = generator.generate(5, &mut rng);
        assert!(is_perfect(&grid));
    }

    #[test]
    fn test_start_off_grid_is_noop() {
        let mut rng = MazeRng::new(5);
        let mut grid = Grid::new(3);
        let stats = MazeGenerator::new()
            .with_start(Cell::new(3, 0))
            .carve(&mut grid, &mut rng);
        assert_eq!(stats, CarveStats::default());
        assert_eq!(grid, Grid::new(3));
    }

    #[test]
    fn test_cells_revisited_after_backtracking() {
        // A junction (3+ passages) means control came back to that cell and
        // it opened another branch.
        let mut rng = MazeRng::new(11);
        let grid = MazeGenerator::new().generate(10, &mut rng);
        let branching = grid
            .cells()
            .filter(|&c| Direction::ALL.iter().filter(|&&d| grid.has_passage(c, d)).count() >= 3)
            .count();
        assert!(branching > 0);
        assert!(is_symmetric(&grid));
    }
}
