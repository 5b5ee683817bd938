#![no_main]
use arbitrary::Arbitrary;
use cellgrid_core::{Cell, Coord, Direction, Grid};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    width: u8,
    height: u8,
    cells: Vec<u32>,
    coords: Vec<(i32, i32)>,
}

fuzz_target!(|input: Input| {
    // Small dimensions keep construction cheap; zero must be rejected, not panic.
    let Ok(grid) = Grid::new(u32::from(input.width), u32::from(input.height)) else {
        return;
    };

    for id in input.cells {
        let cell = Cell(id);
        let adjacent = grid.cell_adjacent(cell);
        for dir in Direction::ALL {
            assert_eq!(grid.neighbor(cell, dir), adjacent[dir.index()]);
        }
        for n in adjacent.into_iter().flatten() {
            assert!(grid.cell_exists(n));
        }
        let _ = grid.moves(cell);
        let _ = grid.distance_manhattan(cell, grid.center());
        let _ = grid.distance_euclidean(grid.center(), cell);
    }

    for (x, y) in input.coords {
        if let Ok(cell) = grid.to_cell(Coord::new(x, y)) {
            assert_eq!(grid.to_coord(cell).ok(), Some(Coord::new(x, y)));
        }
    }
});
