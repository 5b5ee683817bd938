//! Grid configuration files: format detection and deserialization.
//!
//! A grid is described by its size, in any of three formats chosen by file
//! extension:
//!
//! ```text
//! grid.ron   (width: 4, height: 3)
//! grid.json  {"width": 4, "height": 3}
//! grid.toml  [grid]
//!            width = 4
//!            height = 3
//! ```

use cellgrid_core::{Grid, GridError, GridSize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a grid configuration.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed but describes an invalid grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Schema
// ===========================================================================

/// Top-level TOML document. TOML has no bare-struct form, so the size lives
/// under a `[grid]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub grid: GridSize,
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Parse configuration text in the given format. `file` is only used for
/// error messages.
pub fn parse_grid_size(
    content: &str,
    format: Format,
    file: &Path,
) -> Result<GridSize, DataLoadError> {
    let parse_err = |detail: String| DataLoadError::Parse {
        file: file.to_path_buf(),
        detail,
    };

    let size = match format {
        Format::Ron => {
            ron::from_str::<GridSize>(content).map_err(|e| parse_err(e.to_string()))?
        }
        Format::Json => {
            serde_json::from_str::<GridSize>(content).map_err(|e| parse_err(e.to_string()))?
        }
        Format::Toml => {
            toml::from_str::<GridConfig>(content)
                .map_err(|e| parse_err(e.to_string()))?
                .grid
        }
    };

    Ok(size.validate()?)
}

/// Read a configuration file and return the validated grid size.
pub fn load_grid_size(path: &Path) -> Result<GridSize, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_grid_size(&content, format, path)
}

/// Read a configuration file and build the grid it describes.
pub fn load_grid(path: &Path) -> Result<Grid, DataLoadError> {
    Ok(Grid::from_size(load_grid_size(path)?)?)
}

// ===========================================================================
// Tests
// ===========================================================================
