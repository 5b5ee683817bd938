//! Cellgrid Core -- index/coordinate mapping and neighbor topology for
//! rectangular 2D grids.
//!
//! A [`grid::Grid`] numbers its cells left to right, top to bottom
//! (`cell = y * width + x`) and precomputes everything grid-based algorithms
//! (pathfinding, simulation, board games) ask about a cell: its coordinate,
//! its orthogonal moves, and its neighbors in all eight directions. It does
//! no traversal of its own.
//!
//! # Construction
//!
//! ```rust
//! use cellgrid_core::{Cell, Grid};
//!
//! let grid = Grid::new(4, 3).unwrap();
//! assert_eq!(grid.size(), 12);
//! assert_eq!(grid.cell_sides_raw(Cell(5)), [1, 4, 6, 9]);
//!
//! let from_text = Grid::from_reader("4 3\n".as_bytes()).unwrap();
//! assert_eq!(from_text, grid);
//! ```
//!
//! # Neighbor conventions
//!
//! - [`grid::Grid::cell_sides`] and [`grid::Grid::cell_adjacent`] always
//!   return 4 and 8 slots, ordered by [`direction::Direction`]; a missing
//!   neighbor is `None` (or `-1` in the `_raw` variants).
//! - [`grid::Grid::neighbors_4`] and [`grid::Grid::neighbors_8`] yield only
//!   the neighbors that exist.
//!
//! A `Grid` is immutable once built and is `Send + Sync`; build it once and
//! share it.

pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod id;
pub mod input;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use coord::Coord;
pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
pub use id::Cell;
pub use input::{GridSize, read_size};
