//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::Cell;

/// Python wrapper for Cell.
#[pyclass(name = "Cell")]
#[derive(Clone, Debug)]
pub struct PyCell(pub Cell);

#[pymethods]
impl PyCell {
    #[new]
    fn new(x: usize, y: usize) -> Self {
        Self(Cell::new(x, y))
    }

    /// Column index (0-based).
    #[getter]
    fn x(&self) -> usize {
        self.0.x
    }

    /// Row index (0-based).
    #[getter]
    fn y(&self) -> usize {
        self.0.y
    }

    fn __repr__(&self) -> String {
        format!("Cell({}, {})", self.0.x, self.0.y)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.y as u64) << 32) | self.0.x as u64
    }
}
