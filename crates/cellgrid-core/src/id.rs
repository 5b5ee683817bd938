use serde::{Deserialize, Serialize};
use std::fmt;

/// Row-major linear index of a grid position: `y * width + x`.
///
/// Cheap to copy, compare and store; the primary handle for every grid
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell(pub u32);

impl Cell {
    /// Raw value standing for "no neighbor" in fixed-shape neighbor arrays.
    pub const NONE_RAW: i64 = -1;

    /// Convert a signed id. Negative ids and ids beyond `u32` yield `None`.
    pub fn from_raw(raw: i64) -> Option<Cell> {
        u32::try_from(raw).ok().map(Cell)
    }

    /// The signed form of an optional cell, `-1` when absent.
    pub fn to_raw(cell: Option<Cell>) -> i64 {
        cell.map_or(Self::NONE_RAW, |c| i64::from(c.0))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Cell {
    fn from(id: u32) -> Self {
        Cell(id)
    }
}
