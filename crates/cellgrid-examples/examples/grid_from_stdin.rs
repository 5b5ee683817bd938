//! Build a grid from a `"width height"` line on stdin, or from a config file.
//!
//! Run with: `echo "4 3" | cargo run -p cellgrid-examples --example grid_from_stdin`
//! or:       `cargo run -p cellgrid-examples --example grid_from_stdin -- grid.toml`
//!
//! Malformed input is a fatal startup error: the message goes to stderr and
//! the process exits with status 1.

use std::path::Path;

use cellgrid_core::Grid;
use cellgrid_data::load_grid;

fn main() {
    let result = match std::env::args().nth(1) {
        Some(path) => load_grid(Path::new(&path)).map_err(|e| e.to_string()),
        None => Grid::from_reader(std::io::stdin().lock()).map_err(|e| e.to_string()),
    };

    let grid = match result {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "grid {}x{}: {} cells, center {}",
        grid.width(),
        grid.height(),
        grid.size(),
        grid.center()
    );
}
