//! Labyrinth bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, MazeConfig};
use crate::game::Labyrinth;

use super::py_core::PyCell;

/// Python wrapper for Labyrinth.
///
/// A carved maze with one agent starting at (0, 0).
#[pyclass(name = "Labyrinth")]
pub struct PyLabyrinth {
    inner: Labyrinth,
}

#[pymethods]
impl PyLabyrinth {
    /// Create a new maze.
    ///
    /// # Arguments
    /// - size: Side length of the square grid
    /// - seed: RNG seed for a reproducible maze, or None for a random one
    #[new]
    #[pyo3(signature = (size = 20, seed = None))]
    fn new(size: usize, seed: Option<u64>) -> PyResult<Self> {
        let config = MazeConfig { size, seed };
        let inner = Labyrinth::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Move the agent ("up", "down", "left" or "right").
    ///
    /// Returns True if the agent moved.
    fn attempt_move(&mut self, direction: &str) -> PyResult<bool> {
        let direction: Direction = direction
            .parse()
            .map_err(|e: crate::core::MazeError| PyValueError::new_err(e.to_string()))?;
        Ok(self.inner.attempt_move(direction))
    }

    /// Move the agent by key name (arrow keys or WASD). Unknown keys are ignored.
    fn handle_key(&mut self, key: &str) -> bool {
        self.inner.handle_key(key)
    }

    /// Cell bitmasks as an (N, N) uint8 array indexed [y, x].
    fn grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let size = self.inner.grid().size();
        PyArray1::from_slice_bound(py, self.inner.grid().as_bytes())
            .reshape([size, size])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    #[getter]
    fn position(&self) -> PyCell {
        PyCell(self.inner.player().position())
    }

    #[getter]
    fn previous_position(&self) -> PyCell {
        PyCell(self.inner.player().previous_position())
    }

    #[getter]
    fn goal(&self) -> PyCell {
        PyCell(self.inner.goal())
    }

    #[getter]
    fn size(&self) -> usize {
        self.inner.grid().size()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "Labyrinth(size={}, seed={}, position={})",
            self.inner.grid().size(),
            self.inner.seed(),
            self.inner.player().position()
        )
    }
}
