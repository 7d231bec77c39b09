//! Grid model: the bit-packed cell buffer and its queries.
//!
//! - `grid`: `Grid` storage, bounds-checked bit access, neighbour lookup
//! - `flags`: cell bit layout
//! - `analysis`: perfect-maze checks and path queries

pub mod analysis;
pub mod flags;
#[allow(clippy::module_inception)]
pub mod grid;

pub use analysis::{is_perfect, is_symmetric, path_between, reachable_from};
pub use flags::{PASSAGE_MASK, VISITED};
pub use grid::{Grid, Neighbors};
