//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::grid::Grid;
use crate::id::Cell;

/// Build a grid, panicking on invalid dimensions.
pub fn grid(width: u32, height: u32) -> Grid {
    Grid::new(width, height)
        .unwrap_or_else(|e| panic!("failed to build {width}x{height} grid: {e}"))
}

/// The 5x5 grid used by most scenarios; cell 12 is its center.
pub fn grid_5x5() -> Grid {
    grid(5, 5)
}

/// ```text
///  0  1  2  3
///  4  5  6  7
///  8  9 10 11
/// ```
pub fn grid_4x3() -> Grid {
    grid(4, 3)
}

pub fn cells(ids: &[u32]) -> Vec<Cell> {
    ids.iter().copied().map(Cell).collect()
}
