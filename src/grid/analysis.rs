//! Structural checks and path queries over a carved grid.
//!
//! A perfect maze is a spanning tree of the grid graph: every cell reachable
//! from the origin and exactly N*N - 1 passages. Since the tree is unique
//! between any two cells, breadth-first search finds *the* path, not just
//! a shortest one.

use std::collections::VecDeque;

use super::flags::open_directions;
use super::grid::Grid;
use crate::core::Cell;

/// Check that every passage bit is mirrored by its neighbour and none
/// points off the grid.
#[must_use]
pub fn is_symmetric(grid: &Grid) -> bool {
    grid.cells().all(|cell| {
        open_directions(grid.passages(cell)).all(|dir| {
            cell.step(dir, grid.size())
                .is_some_and(|n| grid.has_passage(n, dir.opposite()))
        })
    })
}

/// Count cells reachable from `start` through open passages.
#[must_use]
pub fn reachable_from(grid: &Grid, start: Cell) -> usize {
    if !grid.contains(start) {
        return 0;
    }
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([start]);
    seen[flat(grid, start)] = true;
    let mut count = 0;

    while let Some(cell) = queue.pop_front() {
        count += 1;
        for next in open_neighbors(grid, cell) {
            let i = flat(grid, next);
            if !seen[i] {
                seen[i] = true;
                queue.push_back(next);
            }
        }
    }
    count
}

/// Check the spanning-tree property: symmetric, connected, N*N - 1 edges.
#[must_use]
pub fn is_perfect(grid: &Grid) -> bool {
    is_symmetric(grid)
        && grid.passage_count() == grid.len() - 1
        && reachable_from(grid, grid.origin()) == grid.len()
}

/// The route from `from` to `to` through open passages, both ends included.
///
/// Returns `None` if either cell is off the grid or they are not connected.
#[must_use]
pub fn path_between(grid: &Grid, from: Cell, to: Cell) -> Option<Vec<Cell>> {
    if !grid.contains(from) || !grid.contains(to) {
        return None;
    }
    let mut parent: Vec<Option<Cell>> = vec![None; grid.len()];
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([from]);
    seen[flat(grid, from)] = true;

    while let Some(cell) = queue.pop_front() {
        if cell == to {
            let mut path = vec![to];
            let mut cur = to;
            while let Some(prev) = parent[flat(grid, cur)] {
                path.push(prev);
                cur = prev;
            }
            path.reverse();
            return Some(path);
        }
        for next in open_neighbors(grid, cell) {
            let i = flat(grid, next);
            if !seen[i] {
                seen[i] = true;
                parent[i] = Some(cell);
                queue.push_back(next);
            }
        }
    }
    None
}

fn open_neighbors(grid: &Grid, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    open_directions(grid.passages(cell)).filter_map(move |dir| cell.step(dir, grid.size()))
}

fn flat(grid: &Grid, cell: Cell) -> usize {
    cell.y * grid.size() + cell.x
}
