//! Neighbor directions and their positional indices.
//!
//! The discriminant of each [`Direction`] is its slot in the fixed-shape
//! arrays returned by [`Grid::cell_sides`](crate::grid::Grid::cell_sides)
//! (`Top..=Bottom`) and [`Grid::cell_adjacent`](crate::grid::Grid::cell_adjacent)
//! (all eight).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Top = 0,
    Left = 1,
    Right = 2,
    Bottom = 3,
    TopLeft = 4,
    TopRight = 5,
    BottomLeft = 6,
    BottomRight = 7,
}

const OPPOSITE: [Direction; 8] = [
    Direction::Bottom,
    Direction::Right,
    Direction::Left,
    Direction::Top,
    Direction::BottomRight,
    Direction::BottomLeft,
    Direction::TopRight,
    Direction::TopLeft,
];

impl Direction {
    /// The four orthogonal directions, in `cell_sides` order.
    pub const SIDES: [Direction; 4] = [
        Direction::Top,
        Direction::Left,
        Direction::Right,
        Direction::Bottom,
    ];

    /// All eight directions, in `cell_adjacent` order.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::Left,
        Direction::Right,
        Direction::Bottom,
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    /// Position of this direction in the neighbor arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Direction {
        OPPOSITE[self.index()]
    }

    pub fn is_diagonal(self) -> bool {
        self.index() >= 4
    }

    /// `(dx, dy)` step for this direction; `y` grows downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Top => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, 1),
            Direction::TopLeft => (-1, -1),
            Direction::TopRight => (1, -1),
            Direction::BottomLeft => (-1, 1),
            Direction::BottomRight => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_array_slots() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
        assert_eq!(&Direction::ALL[..4], &Direction::SIDES);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn opposite_cancels_offset() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn sides_are_not_diagonal() {
        assert!(Direction::SIDES.iter().all(|d| !d.is_diagonal()));
        assert!(Direction::ALL[4..].iter().all(|d| d.is_diagonal()));
    }
}
