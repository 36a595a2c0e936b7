use gridbench_core::{Cell, DiagonalMovement, Point, WeightedGrid};

use crate::cost::{PathCostMode, path_cost};
use crate::distance::min_steps;
use crate::error::SearchError;

/// Outcome of one search. An empty path means the end was unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Cells from start to end inclusive, in walking order.
    pub path: Vec<Cell>,
    /// Number of cells finalized before the search stopped.
    pub explored: usize,
}

impl SearchResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Cost of the found path under the shared cost model.
    pub fn cost(&self, mode: PathCostMode) -> f64 {
        path_cost(&self.path, mode)
    }
}

/// A shortest-path search over a [`WeightedGrid`].
pub trait SearchAlgorithm {
    /// Label used in logs and as the result directory name.
    fn name(&self) -> &str;

    /// Diagonal policy the search expands neighbours with.
    fn movement(&self) -> DiagonalMovement;

    /// Find a cheapest path from `start` to `end`.
    ///
    /// Uses the transient state of `grid` as scratch space. Fails with
    /// [`SearchError::InvalidEndpoint`] when either endpoint is outside the
    /// grid or blocked, or when both are the same cell.
    fn find_path(
        &self,
        start: Cell,
        end: Cell,
        grid: &mut WeightedGrid,
    ) -> Result<SearchResult, SearchError>;
}

/// Estimate of the remaining cost between two cells, in half-units.
///
/// Implementations must never overestimate, otherwise the best-first
/// search stops returning cheapest paths.
pub trait Heuristic {
    fn estimate(&self, grid: &WeightedGrid, from: Point, to: Point) -> i32;
}

/// The zero estimate. Turns best-first search into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _grid: &WeightedGrid, _from: Point, _to: Point) -> i32 {
        0
    }
}

/// Fewest steps to the goal times the cheapest step the grid allows.
///
/// Every step costs at least twice the grid's minimum walkable weight (in
/// half-units) and covers at most one cell along each axis, so the estimate
/// is admissible and consistent.
#[derive(Debug, Clone, Copy)]
pub struct GridDistance {
    movement: DiagonalMovement,
}

impl GridDistance {
    pub fn new(movement: DiagonalMovement) -> Self {
        Self { movement }
    }
}

impl Heuristic for GridDistance {
    #[inline]
    fn estimate(&self, grid: &WeightedGrid, from: Point, to: Point) -> i32 {
        let min_weight = i32::from(grid.min_walkable_weight().unwrap_or(0));
        min_steps(from, to, self.movement) * 2 * min_weight
    }
}
