//! # labyrinth
//!
//! Perfect maze generation on a square grid, plus single-agent play.
//!
//! ## Design Principles
//!
//! 1. **Perfect mazes only**: the passage graph is always a spanning tree,
//!    exactly one route between any two cells.
//!
//! 2. **Bit-packed grid**: one byte per cell, four passage bits and a
//!    visited flag. Passage bits are always set in symmetric pairs.
//!
//! 3. **Deterministic when seeded**: the same seed yields a byte-identical
//!    grid, on every platform.
//!
//! ## Modules
//!
//! - `core`: Cells, directions, configuration, errors, RNG
//! - `grid`: Bit-packed grid storage, neighbour queries, maze analysis
//! - `generator`: Randomized depth-first backtracking
//! - `play`: Agent position, move validation, key mapping
//! - `game`: `Labyrinth`, the generate-then-play entry point
//!
//! ## Example
//!
//! ```
//! use labyrinth::{Direction, Labyrinth, MazeConfig};
//!
//! let mut lab = Labyrinth::new(MazeConfig::new(20).with_seed(7)).unwrap();
//!
//! // The origin has no neighbours above or to the left.
//! assert!(!lab.attempt_move(Direction::Up));
//! assert!(!lab.attempt_move(Direction::Left));
//!
//! // But it always has at least one way out.
//! assert!(lab.attempt_move(Direction::Down) || lab.attempt_move(Direction::Right));
//! ```

pub mod core;
pub mod game;
pub mod generator;
pub mod grid;
pub mod play;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Cell, Direction, MazeConfig, MazeError, MazeRng, MazeRngState};
pub use crate::game::Labyrinth;
pub use crate::generator::{CarveStats, MazeGenerator};
pub use crate::grid::Grid;
pub use crate::play::{InputHandler, PlayState};
