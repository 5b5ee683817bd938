//! The grid: coordinate/index mapping and precomputed neighbor tables.
//!
//! Cells are numbered left to right, top to bottom. All tables are built once
//! in [`Grid::from_size`] and never change afterward, so a `Grid` can be shared
//! between any number of readers without locking.

use serde::{Deserialize, Serialize};
use std::io::BufRead;

use crate::coord::Coord;
use crate::direction::Direction;
use crate::error::GridError;
use crate::id::Cell;
use crate::input::{GridSize, read_size};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular field indexed by [`Cell`] ids.
///
/// Maintains a bidirectional mapping:
/// - `by_cell`: cell -> coordinate (dense, indexed by cell id)
/// - `by_coord`: x column -> y row -> cell
///
/// plus `moves`, the valid orthogonal neighbors of every cell in
/// `[Top, Left, Right, Bottom]` order.
///
/// Serializes as its [`GridSize`]; the tables are rebuilt on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridSize", into = "GridSize")]
pub struct Grid {
    width: u32,
    height: u32,
    size: u32,
    cells: Vec<Cell>,
    by_cell: Vec<Coord>,
    by_coord: Vec<Vec<Cell>>,
    moves: Vec<Vec<Cell>>,
    center: Cell,
}

impl Grid {
    // -- Construction --

    /// Build a `width` x `height` grid. Both dimensions must be at least 1.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::from_size(GridSize::new(width, height))
    }

    pub fn from_size(size: GridSize) -> Result<Self, GridError> {
        let GridSize { width, height } = size.validate()?;
        let cell_count = width * height;
        let len = cell_count as usize;

        let mut grid = Grid {
            width,
            height,
            size: cell_count,
            cells: Vec::with_capacity(len),
            by_cell: Vec::with_capacity(len),
            by_coord: vec![Vec::new(); width as usize],
            moves: Vec::with_capacity(len),
            center: Cell(cell_count / 2),
        };

        for id in 0..cell_count {
            let cell = Cell(id);
            grid.cells.push(cell);
            let moves = grid.cell_sides(cell).into_iter().flatten().collect();
            grid.moves.push(moves);
        }

        // validate() keeps both dimensions within i32.
        for y in 0..height {
            for x in 0..width {
                grid.by_cell.push(Coord::new(x as i32, y as i32));
            }
        }
        for (id, coord) in grid.by_cell.iter().enumerate() {
            grid.by_coord[coord.x as usize].push(Cell(id as u32));
        }

        Ok(grid)
    }

    /// Read one `"width height"` line from `reader` and build the grid.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, GridError> {
        Self::from_size(read_size(reader)?)
    }

    // -- Dimensions --

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn grid_size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }

    /// The cell at linear index `size / 2`.
    #[inline]
    pub fn center(&self) -> Cell {
        self.center
    }

    // -- Tables --

    /// All cell ids in ascending order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates indexed by cell id.
    pub fn by_cell(&self) -> &[Coord] {
        &self.by_cell
    }

    /// Cells grouped by column; within a column ordered by increasing `y`.
    pub fn by_coord(&self) -> &[Vec<Cell>] {
        &self.by_coord
    }

    /// Precomputed orthogonal neighbors of `cell`, in `[Top, Left, Right, Bottom]`
    /// order with missing directions skipped.
    pub fn moves(&self, cell: Cell) -> Result<&[Cell], GridError> {
        self.moves
            .get(cell.index())
            .map(Vec::as_slice)
            .ok_or(GridError::CellOutOfRange {
                cell,
                size: self.size,
            })
    }

    // -- Existence --

    pub fn cell_exists(&self, cell: Cell) -> bool {
        cell.0 < self.size
    }

    pub fn coord_exists(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    // -- Conversion --

    pub fn to_coord(&self, cell: Cell) -> Result<Coord, GridError> {
        self.by_cell
            .get(cell.index())
            .copied()
            .ok_or(GridError::CellOutOfRange {
                cell,
                size: self.size,
            })
    }

    pub fn to_cell(&self, coord: Coord) -> Result<Cell, GridError> {
        let out_of_range = GridError::CoordOutOfRange {
            coord,
            width: self.width,
            height: self.height,
        };
        if !self.coord_exists(coord) {
            return Err(out_of_range);
        }
        self.by_coord
            .get(coord.x as usize)
            .and_then(|column| column.get(coord.y as usize))
            .copied()
            .ok_or(out_of_range)
    }

    // -- Distances --

    /// `|dx| + |dy|` between two cells.
    pub fn distance_manhattan(&self, from: Cell, to: Cell) -> Result<u32, GridError> {
        let a = self.to_coord(from)?;
        let b = self.to_coord(to)?;
        Ok(a.manhattan_distance(&b))
    }

    /// `sqrt(dx^2 + dy^2)` between two cells.
    pub fn distance_euclidean(&self, from: Cell, to: Cell) -> Result<f64, GridError> {
        let a = self.to_coord(from)?;
        let b = self.to_coord(to)?;
        Ok(a.euclidean_distance(&b))
    }

    // -- Orthogonal neighbors --
    //
    // Each returns `None` at the grid edge, and for cells that do not exist.

    pub fn top(&self, cell: Cell) -> Option<Cell> {
        if !self.cell_exists(cell) {
            return None;
        }
        cell.0.checked_sub(self.width).map(Cell)
    }

    pub fn bottom(&self, cell: Cell) -> Option<Cell> {
        if !self.cell_exists(cell) {
            return None;
        }
        cell.0
            .checked_add(self.width)
            .filter(|&id| id < self.size)
            .map(Cell)
    }

    pub fn left(&self, cell: Cell) -> Option<Cell> {
        if !self.cell_exists(cell) || cell.0 % self.width == 0 {
            return None;
        }
        Some(Cell(cell.0 - 1))
    }

    pub fn right(&self, cell: Cell) -> Option<Cell> {
        if !self.cell_exists(cell) || cell.0 % self.width == self.width - 1 {
            return None;
        }
        Some(Cell(cell.0 + 1))
    }

    // -- Diagonal neighbors --
    //
    // Vertical step first, then the horizontal step from the resulting cell,
    // so a diagonal never wraps into a neighboring row.

    pub fn top_left(&self, cell: Cell) -> Option<Cell> {
        self.top(cell).and_then(|top| self.left(top))
    }

    pub fn top_right(&self, cell: Cell) -> Option<Cell> {
        self.top(cell).and_then(|top| self.right(top))
    }

    pub fn bottom_left(&self, cell: Cell) -> Option<Cell> {
        self.bottom(cell).and_then(|bottom| self.left(bottom))
    }

    pub fn bottom_right(&self, cell: Cell) -> Option<Cell> {
        self.bottom(cell).and_then(|bottom| self.right(bottom))
    }

    /// The neighbor of `cell` in `dir`, if any.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        match dir {
            Direction::Top => self.top(cell),
            Direction::Left => self.left(cell),
            Direction::Right => self.right(cell),
            Direction::Bottom => self.bottom(cell),
            Direction::TopLeft => self.top_left(cell),
            Direction::TopRight => self.top_right(cell),
            Direction::BottomLeft => self.bottom_left(cell),
            Direction::BottomRight => self.bottom_right(cell),
        }
    }

    // -- Fixed-shape neighbor sets --

    /// `[Top, Left, Right, Bottom]`. Always four slots; absent neighbors are `None`.
    pub fn cell_sides(&self, cell: Cell) -> [Option<Cell>; 4] {
        Direction::SIDES.map(|dir| self.neighbor(cell, dir))
    }

    /// `[Top, Left, Right, Bottom, TopLeft, TopRight, BottomLeft, BottomRight]`.
    pub fn cell_adjacent(&self, cell: Cell) -> [Option<Cell>; 8] {
        Direction::ALL.map(|dir| self.neighbor(cell, dir))
    }

    /// [`cell_sides`](Self::cell_sides) with `-1` marking absent neighbors.
    pub fn cell_sides_raw(&self, cell: Cell) -> [i64; 4] {
        self.cell_sides(cell).map(Cell::to_raw)
    }

    /// [`cell_adjacent`](Self::cell_adjacent) with `-1` marking absent neighbors.
    pub fn cell_adjacent_raw(&self, cell: Cell) -> [i64; 8] {
        self.cell_adjacent(cell).map(Cell::to_raw)
    }

    // -- Filtered neighbor sets --

    /// Present orthogonal neighbors only.
    pub fn neighbors_4(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        self.cell_sides(cell).into_iter().flatten()
    }

    /// Present orthogonal and diagonal neighbors only.
    pub fn neighbors_8(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        self.cell_adjacent(cell).into_iter().flatten()
    }

    /// Present neighbors paired with the direction they lie in.
    pub fn neighbors_with_direction(
        &self,
        cell: Cell,
    ) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(cell, dir).map(|n| (dir, n)))
    }
}

impl TryFrom<GridSize> for Grid {
    type Error = GridError;

    fn try_from(size: GridSize) -> Result<Self, Self::Error> {
        Grid::from_size(size)
    }
}

impl From<Grid> for GridSize {
    fn from(grid: Grid) -> Self {
        grid.grid_size()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
