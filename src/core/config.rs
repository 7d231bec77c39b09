//! Maze configuration.
//!
//! A `MazeConfig` fixes everything a run depends on:
//! - `size`: side length of the square grid
//! - `seed`: optional RNG seed; `None` draws a fresh one per run
//!
//! Configs are plain serde data so hosts can load them from their own
//! settings files.

use serde::{Deserialize, Serialize};

use super::error::MazeError;

/// Side length used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Largest supported side length.
pub const MAX_GRID_SIZE: usize = 1024;

/// Configuration for building a maze.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Side length N of the N x N grid.
    pub size: usize,

    /// Seed for reproducible mazes. `None` for a random maze.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Create a configuration with a custom grid size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Small grid, handy for tests.
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn large() -> Self {
        Self::new(40)
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Fix the seed so the same maze is produced every run.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before use.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            return Err(MazeError::InvalidSize {
                size: self.size,
                max: MAX_GRID_SIZE,
            });
        }
        Ok(())
    }

    /// Number of cells on the configured grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}
