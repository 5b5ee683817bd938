use serde::{Deserialize, Serialize};
use std::fmt;

/// A Cartesian position on the grid. `x` is the column, `y` the row,
/// both counted from the top-left corner.
///
/// Signed so that positions outside the grid can be expressed and rejected
/// by [`Grid::coord_exists`](crate::grid::Grid::coord_exists).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate.
    pub fn manhattan_distance(&self, other: &Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Straight-line distance to another coordinate.
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// The coordinate one step away by `(dx, dy)`.
    pub fn offset(&self, (dx, dy): (i32, i32)) -> Coord {
        Coord::new(self.x + dx, self.y + dy)
    }
}

/// Renders as `x.y`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}
