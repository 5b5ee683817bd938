//! Grid dimensions and the one-line `"width height"` size format.

use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::str::FromStr;

use crate::error::GridError;

/// Width and height of a grid.
///
/// Holds unchecked values as read from configuration; [`GridSize::validate`]
/// (called by every grid constructor) rejects empty or oversized grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from signed values, rejecting anything below 1 or beyond `u32`.
    pub fn from_signed(width: i64, height: i64) -> Result<Self, GridError> {
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Self::new(w, h).validate(),
            _ => Err(GridError::InvalidDimensions { width, height }),
        }
    }

    /// Check both dimensions are at least 1, each fits a [`Coord`](crate::coord::Coord)
    /// axis, and every cell id fits in `u32`.
    pub fn validate(self) -> Result<Self, GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: i64::from(self.width),
                height: i64::from(self.height),
            });
        }
        let axis_max = i32::MAX as u32;
        if self.width > axis_max
            || self.height > axis_max
            || self.width.checked_mul(self.height).is_none()
        {
            return Err(GridError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Number of cells. Only meaningful on a validated size.
    pub fn cell_count(&self) -> u32 {
        self.width.saturating_mul(self.height)
    }
}

/// Parses `"width height"`: exactly two whitespace-separated integers.
impl FromStr for GridSize {
    type Err = GridError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(GridError::TokenCount {
                found: tokens.len(),
            });
        }
        let width = parse_token(tokens[0])?;
        let height = parse_token(tokens[1])?;
        GridSize::from_signed(width, height)
    }
}

fn parse_token(token: &str) -> Result<i64, GridError> {
    token.parse::<i64>().map_err(|_| GridError::InvalidToken {
        token: token.to_string(),
    })
}

/// Read a single line from `reader` and parse it as a grid size.
///
/// An empty stream counts as a line with zero tokens.
pub fn read_size<R: BufRead>(mut reader: R) -> Result<GridSize, GridError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    line.parse()
}
