//! Maze generation.
//!
//! `MazeGenerator` carves a perfect maze into an empty `Grid` using
//! randomized depth-first backtracking driven by a seedable `MazeRng`.

mod backtracker;

pub use backtracker::{CarveStats, MazeGenerator};
