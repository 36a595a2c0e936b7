use gridbench_core::{DiagonalMovement, Point};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Fewest single-cell steps from `a` to `b` on an empty grid under
/// `movement`.
#[inline]
pub fn min_steps(a: Point, b: Point, movement: DiagonalMovement) -> i32 {
    if movement.allows_diagonals() {
        chebyshev(a, b)
    } else {
        manhattan(a, b)
    }
}
