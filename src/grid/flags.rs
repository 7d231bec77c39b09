//! Cell bit layout.
//!
//! Each cell is one byte. The low four bits are passages (see
//! [`Direction::bit`](crate::core::Direction::bit)); bit 4 is the generator's
//! visited flag. Play never reads the visited flag.

use crate::core::Direction;

/// Set once the generator has processed the cell.
pub const VISITED: u8 = 1 << 4;

/// All four passage bits.
pub const PASSAGE_MASK: u8 = 0b1111;

/// Directions with an open passage in `bits`.
pub fn open_directions(bits: u8) -> impl Iterator<Item = Direction> {
    Direction::ALL.into_iter().filter(move |d| bits & d.bit() != 0)
}
