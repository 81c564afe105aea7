//! Board positions.
//!
//! A position is a `u8` index into the board. Index 0 is reserved and never
//! holds a player; usable positions run from 1 to `positions_count - 1`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Location, SetupError};
use crate::narrow::narrow_at;

/// A location on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub u8);

/// The unused slot at index 0.
pub const RESERVED_POSITION: Position = Position(0);

impl Position {
    /// Returns the position as an index into the board's slots.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_reserved(self) -> bool {
        self.0 == RESERVED_POSITION.0
    }
}

impl From<u8> for Position {
    fn from(value: u8) -> Self {
        Position(value)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Narrows `value` to a position usable by a player: `[1, positions_count)`.
pub fn player_position(
    value: i64,
    positions_count: u8,
    at: impl Fn() -> Location,
) -> Result<Position, SetupError> {
    let raw: u8 = narrow_at(value, &at)?;
    if raw == RESERVED_POSITION.0 || raw >= positions_count {
        return Err(SetupError::OutOfRange {
            at: at(),
            value,
            range: format!("1..{}", positions_count),
        });
    }
    Ok(Position(raw))
}

/// Narrows `value` to an edge endpoint: any slot index in `[0, slots)`.
pub fn edge_endpoint(value: i64, slots: usize, at: impl Fn() -> Location) -> Result<Position, SetupError> {
    let raw: u8 = narrow_at(value, &at)?;
    if usize::from(raw) >= slots {
        return Err(SetupError::OutOfRange {
            at: at(),
            value,
            range: format!("0..{}", slots),
        });
    }
    Ok(Position(raw))
}
