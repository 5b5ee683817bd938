pub mod loader;

pub use loader::{DataLoadError, Format, GridConfig, load_grid, load_grid_size};
