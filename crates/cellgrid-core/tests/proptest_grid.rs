//! Property-based tests for the grid.
//!
//! Uses proptest to generate random dimensions and cells, then verify the
//! mapping and neighbor invariants hold.

use cellgrid_core::*;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1..=24u32, 1..=24u32).prop_map(|(w, h)| Grid::new(w, h).unwrap())
}

/// A grid plus a cell that exists on it.
fn arb_grid_and_cell() -> impl Strategy<Value = (Grid, Cell)> {
    arb_grid().prop_flat_map(|grid| {
        let size = grid.size();
        (Just(grid), (0..size).prop_map(Cell))
    })
}

fn arb_grid_and_two_cells() -> impl Strategy<Value = (Grid, Cell, Cell)> {
    arb_grid().prop_flat_map(|grid| {
        let size = grid.size();
        (Just(grid), (0..size).prop_map(Cell), (0..size).prop_map(Cell))
    })
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn size_and_enumeration(w in 1..=40u32, h in 1..=40u32) {
        let grid = Grid::new(w, h).unwrap();
        prop_assert_eq!(grid.size(), w * h);
        let expected: Vec<Cell> = (0..w * h).map(Cell).collect();
        prop_assert_eq!(grid.cells(), &expected[..]);
        prop_assert_eq!(grid.center(), Cell(w * h / 2));
    }

    #[test]
    fn cell_round_trip((grid, cell) in arb_grid_and_cell()) {
        let coord = grid.to_coord(cell).unwrap();
        prop_assert!(grid.coord_exists(coord));
        prop_assert_eq!(grid.to_cell(coord).unwrap(), cell);
        prop_assert_eq!(cell.0, coord.y as u32 * grid.width() + coord.x as u32);
    }

    #[test]
    fn coord_round_trip(grid in arb_grid(), x in -3..30i32, y in -3..30i32) {
        let coord = Coord::new(x, y);
        let inside = x >= 0 && y >= 0 && (x as u32) < grid.width() && (y as u32) < grid.height();
        prop_assert_eq!(grid.coord_exists(coord), inside);
        match grid.to_cell(coord) {
            Ok(cell) => {
                prop_assert!(inside);
                prop_assert_eq!(grid.to_coord(cell).unwrap(), coord);
            }
            Err(_) => prop_assert!(!inside),
        }
    }

    #[test]
    fn cell_exists_exactly_in_range(grid in arb_grid(), id in 0..700u32) {
        prop_assert_eq!(grid.cell_exists(Cell(id)), id < grid.size());
        prop_assert_eq!(grid.to_coord(Cell(id)).is_ok(), id < grid.size());
    }

    #[test]
    fn boundary_policy((grid, cell) in arb_grid_and_cell()) {
        let coord = grid.to_coord(cell).unwrap();
        let last_col = grid.width() as i32 - 1;
        let last_row = grid.height() as i32 - 1;
        prop_assert_eq!(grid.top(cell).is_none(), coord.y == 0);
        prop_assert_eq!(grid.bottom(cell).is_none(), coord.y == last_row);
        prop_assert_eq!(grid.left(cell).is_none(), coord.x == 0);
        prop_assert_eq!(grid.right(cell).is_none(), coord.x == last_col);
    }

    #[test]
    fn neighbors_match_coordinate_offsets((grid, cell) in arb_grid_and_cell()) {
        let coord = grid.to_coord(cell).unwrap();
        for dir in Direction::ALL {
            let stepped = coord.offset(dir.offset());
            let expected = grid.to_cell(stepped).ok();
            prop_assert_eq!(grid.neighbor(cell, dir), expected, "{:?}", dir);
        }
    }

    #[test]
    fn diagonal_absent_when_a_step_is_absent((grid, cell) in arb_grid_and_cell()) {
        let pairs = [
            (Direction::TopLeft, Direction::Top, Direction::Left),
            (Direction::TopRight, Direction::Top, Direction::Right),
            (Direction::BottomLeft, Direction::Bottom, Direction::Left),
            (Direction::BottomRight, Direction::Bottom, Direction::Right),
        ];
        for (diag, vertical, horizontal) in pairs {
            if grid.neighbor(cell, vertical).is_none() || grid.neighbor(cell, horizontal).is_none() {
                prop_assert_eq!(grid.neighbor(cell, diag), None);
            }
        }
    }

    #[test]
    fn fixed_shape((grid, cell) in arb_grid_and_cell()) {
        let sides = grid.cell_sides(cell);
        let adjacent = grid.cell_adjacent(cell);
        prop_assert_eq!(&adjacent[..4], &sides[..]);
        for raw in grid.cell_adjacent_raw(cell) {
            prop_assert!(raw == -1 || (raw >= 0 && (raw as u32) < grid.size()));
        }
    }

    #[test]
    fn moves_stay_in_range((grid, cell) in arb_grid_and_cell()) {
        let moves = grid.moves(cell).unwrap();
        prop_assert!(moves.len() <= 4);
        for m in moves {
            prop_assert!(grid.cell_exists(*m));
            prop_assert_eq!(grid.distance_manhattan(cell, *m).unwrap(), 1);
        }
    }

    #[test]
    fn distance_symmetry((grid, a, b) in arb_grid_and_two_cells()) {
        let m_ab = grid.distance_manhattan(a, b).unwrap();
        let m_ba = grid.distance_manhattan(b, a).unwrap();
        prop_assert_eq!(m_ab, m_ba);
        prop_assert_eq!(m_ab == 0, a == b);

        let e_ab = grid.distance_euclidean(a, b).unwrap();
        let e_ba = grid.distance_euclidean(b, a).unwrap();
        prop_assert_eq!(e_ab, e_ba);
        prop_assert_eq!(e_ab == 0.0, a == b);
        prop_assert!(e_ab <= m_ab as f64 + 1e-9);
    }
}
