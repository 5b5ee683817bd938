//! Grid topology tour: ids, coordinates, neighbors and distances.
//!
//! Run with: `cargo run -p cellgrid-examples --example grid_tour`

use cellgrid_core::{Cell, Coord, Direction, Grid, GridError};

fn main() -> Result<(), GridError> {
    let grid = Grid::new(4, 3)?;

    // --- Layout ---

    println!("=== {}x{} grid ===\n", grid.width(), grid.height());
    for y in 0..grid.height() {
        let row: Vec<String> = (0..grid.width())
            .map(|x| grid.to_cell(Coord::new(x as i32, y as i32)))
            .map(|cell| cell.map(|c| format!("{:>3}", c.0)))
            .collect::<Result<_, _>>()?;
        println!("{}", row.join(""));
    }
    println!("\ncenter: {}", grid.center());

    // --- Neighbors ---

    println!("\n=== Neighbors ===\n");
    for id in [0, 5, 8, 11] {
        let cell = Cell(id);
        let coord = grid.to_coord(cell)?;
        println!("cell {cell} at {coord}");
        println!("    sides:    {:?}", grid.cell_sides_raw(cell));
        println!("    adjacent: {:?}", grid.cell_adjacent_raw(cell));
        println!("    moves:    {:?}", grid.moves(cell)?);
        for (dir, neighbor) in grid.neighbors_with_direction(cell) {
            if dir.is_diagonal() {
                continue;
            }
            println!(
                "      {dir:?} -> {neighbor} (back via {:?})",
                dir.opposite()
            );
        }
    }

    // --- Distances ---

    println!("\n=== Distances from cell 0 ===\n");
    let origin = Cell(0);
    for &cell in grid.cells() {
        println!(
            "    {:>2}: manhattan {}, euclidean {:.3}",
            cell.0,
            grid.distance_manhattan(origin, cell)?,
            grid.distance_euclidean(origin, cell)?
        );
    }

    // --- Boundary ---

    println!("\n=== Boundary ===\n");
    for dir in Direction::ALL {
        let beyond = grid.neighbor(Cell(11), dir);
        println!("    cell 11 {dir:?}: {beyond:?}");
    }

    Ok(())
}
