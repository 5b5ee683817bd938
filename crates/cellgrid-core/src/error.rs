use crate::coord::Coord;
use crate::id::Cell;

/// Errors from grid construction and checked access.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Width or height is below 1 (or does not fit the cell id space).
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: i64, height: i64 },

    /// The number of cells does not fit the cell id space.
    #[error("grid {width}x{height} has too many cells")]
    TooLarge { width: u32, height: u32 },

    /// The size line did not hold exactly two tokens.
    #[error("invalid input arguments {found} for size, expected 2")]
    TokenCount { found: usize },

    /// A size token is not an integer.
    #[error("size token '{token}' is not an integer")]
    InvalidToken { token: String },

    /// The cell id is not inside `[0, size)`.
    #[error("cell {cell} is out of range for grid of size {size}")]
    CellOutOfRange { cell: Cell, size: u32 },

    /// The coordinate is not inside `[0, width) x [0, height)`.
    #[error("coordinate {coord} is out of range for {width}x{height} grid")]
    CoordOutOfRange {
        coord: Coord,
        width: u32,
        height: u32,
    },

    /// Reading the size line failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
