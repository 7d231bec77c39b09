//! Core types: coordinates, directions, configuration, errors, RNG.
//!
//! These carry no maze logic of their own; the grid, generator and play
//! modules are built on them.

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use cell::Cell;
pub use config::{MazeConfig, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
pub use direction::Direction;
pub use error::MazeError;
pub use rng::{MazeRng, MazeRngState};
