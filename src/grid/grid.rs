//! Bit-packed square grid.
//!
//! The grid is a single row-major buffer of N*N bytes. All accessors
//! bounds-check their cell: queries on out-of-bounds cells answer `false`,
//! mutations refuse and report that nothing changed.

use smallvec::SmallVec;

use super::flags::{PASSAGE_MASK, VISITED};
use crate::core::{Cell, Direction};

/// Neighbour list: at most four entries, kept inline.
pub type Neighbors = SmallVec<[(Cell, Direction); 4]>;

/// Probe order for neighbours. Fixed so seeded generation is reproducible.
const PROBE_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

/// Square maze grid with one bitmask byte per cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-walls grid of `size` x `size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Use [`MazeConfig::validate`] on untrusted
    /// sizes.
    ///
    /// [`MazeConfig::validate`]: crate::core::MazeConfig::validate
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid must have at least one cell");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N*N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size)
    }

    /// Start cell for generation and play.
    #[must_use]
    pub fn origin(&self) -> Cell {
        Cell::ORIGIN
    }

    /// Bottom-right cell, the goal renderers highlight.
    #[must_use]
    pub fn goal(&self) -> Cell {
        Cell::new(self.size - 1, self.size - 1)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }

    /// Raw bitmask of a cell.
    #[must_use]
    pub fn bits(&self, cell: Cell) -> Option<u8> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Row-major cell bytes, `y * size + x`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Check for an open passage from `cell` toward `direction`.
    #[must_use]
    pub fn has_passage(&self, cell: Cell, direction: Direction) -> bool {
        self.bits(cell).is_some_and(|b| b & direction.bit() != 0)
    }

    /// Set a single passage bit on `cell`.
    ///
    /// Does not touch the neighbour; callers pair it with the opposite bit
    /// on the neighbour, or use [`Grid::carve`] which does both. Returns
    /// `false` without changes if `cell` is off the grid or has no
    /// neighbour in `direction`.
    pub fn set_passage(&mut self, cell: Cell, direction: Direction) -> bool {
        if cell.step(direction, self.size).is_none() {
            return false;
        }
        match self.index(cell) {
            Some(i) => {
                self.cells[i] |= direction.bit();
                true
            }
            None => false,
        }
    }

    /// Open the wall between `cell` and its neighbour in `direction`.
    ///
    /// Sets both bits so the passage is symmetric. Returns the neighbour, or
    /// `None` (no changes) if there is none.
    pub fn carve(&mut self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = cell.step(direction, self.size)?;
        self.set_passage(cell, direction);
        self.set_passage(next, direction.opposite());
        Some(next)
    }

    #[must_use]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.bits(cell).is_some_and(|b| b & VISITED != 0)
    }

    /// Set the visited flag. Returns `true` if it was newly set.
    pub fn mark_visited(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(i) if self.cells[i] & VISITED == 0 => {
                self.cells[i] |= VISITED;
                true
            }
            _ => false,
        }
    }

    /// In-bounds adjacent cells, each with the direction leading to it.
    ///
    /// Corners have 2, edges 3, interior cells 4. Empty for a cell that is
    /// itself off the grid.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        PROBE_ORDER
            .iter()
            .filter_map(|&dir| cell.step(dir, self.size).map(|n| (n, dir)))
            .collect()
    }

    /// Neighbours not yet visited by the generator.
    #[must_use]
    pub fn unvisited_neighbors(&self, cell: Cell) -> Neighbors {
        let mut neighbors = self.neighbors(cell);
        neighbors.retain(|(n, _)| !self.is_visited(*n));
        neighbors
    }

    /// Number of undirected passages.
    ///
    /// Counts each cell's Down and Right bits so every edge is seen once.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        let mask = Direction::Down.bit() | Direction::Right.bit();
        self.cells
            .iter()
            .map(|b| (b & mask).count_ones() as usize)
            .sum()
    }

    /// Passage bits of a cell with the visited flag stripped.
    #[must_use]
    pub fn passages(&self, cell: Cell) -> u8 {
        self.bits(cell).map_or(0, |b| b & PASSAGE_MASK)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.y * self.size + cell.x)
    }
}
