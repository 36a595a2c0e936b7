//! The [`Cell`] type: a grid position with a traversal weight.

use crate::geom::Point;

/// Weight of an impassable cell.
pub const BLOCKED: u8 = 0;

/// A positioned cell of a [`WeightedGrid`](crate::WeightedGrid).
///
/// Identity is positional; two cells are equal when they sit at the same
/// coordinates and carry the same weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub weight: u8,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Point, weight: u8) -> Self {
        Self { pos, weight }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.pos.y
    }

    /// Whether the cell can be entered.
    #[inline]
    pub const fn walkable(self) -> bool {
        self.weight != BLOCKED
    }
}
