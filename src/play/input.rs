//! Key-to-direction mapping for hosts that forward raw key events.
//!
//! Arrow keys and WASD both steer. Anything else maps to `None` and should be
//! ignored by the caller.

use crate::core::Direction;

/// Stateless key mapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key name to a direction.
    ///
    /// Accepts DOM-style names (`"ArrowUp"`), short names (`"Up"`) and
    /// WASD in either case.
    pub fn direction_for_key(&self, key: &str) -> Option<Direction> {
        match key {
            // Movement - Arrow keys
            "ArrowUp" | "Up" => Some(Direction::Up),
            "ArrowDown" | "Down" => Some(Direction::Down),
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),

            // Movement - WASD
            "w" | "W" => Some(Direction::Up),
            "s" | "S" => Some(Direction::Down),
            "a" | "A" => Some(Direction::Left),
            "d" | "D" => Some(Direction::Right),

            _ => None,
        }
    }

    /// Map a legacy DOM `keyCode` to a direction.
    pub fn direction_for_key_code(&self, code: u32) -> Option<Direction> {
        match code {
            38 | 87 => Some(Direction::Up),
            40 | 83 => Some(Direction::Down),
            37 | 65 => Some(Direction::Left),
            39 | 68 => Some(Direction::Right),
            _ => None,
        }
    }
}
