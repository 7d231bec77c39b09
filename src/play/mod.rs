//! Play: one agent moving through a carved maze.
//!
//! `PlayState` holds the agent's cell and validates moves against a `Grid`.
//! `InputHandler` turns raw key names into directions.

pub mod input;
pub mod state;

pub use input::InputHandler;
pub use state::PlayState;
