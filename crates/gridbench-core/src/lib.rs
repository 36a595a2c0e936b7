//! **gridbench-core**: weighted grids for pathfinding benchmarks.
//!
//! This crate provides the types shared across the *gridbench* workspace:
//! geometry primitives, weighted cells, the [`WeightedGrid`] with its
//! resettable per-search state, diagonal-movement policies, and the
//! digit-per-cell text format maps are stored in.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod movement;
pub mod text;

pub use cell::{BLOCKED, Cell};
pub use error::{GridError, Result};
pub use geom::{Point, Range};
pub use grid::{NO_PARENT, SearchNode, UNREACHABLE, WeightedGrid};
pub use movement::{DiagonalMovement, UnknownMovement};
pub use text::{load_grid, read_grid, save_grid, write_grid};
