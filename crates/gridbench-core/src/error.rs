//! Errors raised while building, addressing, or (de)serializing grids.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("{width}x{height} grid needs {} weights, got {found}", .width * .height)]
    DimensionMismatch {
        width: usize,
        height: usize,
        found: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid weight {ch:?} at ({x}, {y}), expected a digit")]
    InvalidDigit { ch: char, x: usize, y: usize },

    #[error("weight {weight} at {pos} does not fit the digit-per-cell format")]
    WeightOutOfRange { weight: u8, pos: crate::Point },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
