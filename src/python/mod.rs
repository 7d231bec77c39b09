//! Python bindings for the labyrinth maze engine.
//!
//! # Quick Start
//!
//! ```python
//! import labyrinth
//!
//! lab = labyrinth.Labyrinth(size=20, seed=42)
//!
//! # Bitmask grid for drawing walls, indexed [y, x]
//! cells = lab.grid()
//!
//! # Try to move; False means a wall was in the way
//! moved = lab.attempt_move("down") or lab.attempt_move("right")
//! print(lab.position, lab.previous_position)
//! ```

use pyo3::prelude::*;

use crate::core::Direction;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// labyrinth: perfect maze generation and single-agent play.
#[pymodule]
fn labyrinth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCell>()?;
    m.add_class::<PyLabyrinth>()?;
    m.add("VISITED", crate::grid::VISITED)?;
    m.add("UP", Direction::Up.bit())?;
    m.add("DOWN", Direction::Down.bit())?;
    m.add("LEFT", Direction::Left.bit())?;
    m.add("RIGHT", Direction::Right.bit())?;

    Ok(())
}
