//! Error type for maze construction.
//!
//! Generation and play have no failure modes of their own; only user-facing
//! input (configuration values, direction names) can be rejected.

use thiserror::Error;

/// Errors surfaced by the public API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Grid side length is zero or larger than supported.
    #[error("grid size {size} must be between 1 and {max}")]
    InvalidSize { size: usize, max: usize },

    /// A direction name that is not one of up/down/left/right.
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}
