//! Grid coordinates.
//!
//! Coordinates are signed, so a neighbour offset can step off the grid and
//! be rejected by a bounds check instead of wrapping around.

use std::fmt;

/// A cell position. `x` is the column, `y` the row; rows grow downwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbours: up, right, down, left.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Point::new(x, y - 1),
            Point::new(x + 1, y),
            Point::new(x, y + 1),
            Point::new(x - 1, y),
        ]
    }

    /// Diagonal neighbours: up-right, down-right, down-left, up-left.
    #[inline]
    pub fn diagonals(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Point::new(x + 1, y - 1),
            Point::new(x + 1, y + 1),
            Point::new(x - 1, y + 1),
            Point::new(x - 1, y - 1),
        ]
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half-open rectangle of points: `min` inclusive, `max` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The `width × height` rectangle anchored at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self {
            min: Point::new(0, 0),
            max: Point::new(width, height),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every point, row by row.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| Point::new(x, y)))
    }
}
