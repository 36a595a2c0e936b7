//! The [`WeightedGrid`] type: a fixed-size 2D grid of traversal weights.
//!
//! Besides its weights, a grid carries one [`SearchNode`] per cell holding
//! the transient bookkeeping of the search currently running on it. Nodes
//! are stamped with a generation counter: [`WeightedGrid::cleanup`] bumps
//! the counter, which invalidates every node at once without touching or
//! reallocating the node array.

use crate::cell::{BLOCKED, Cell};
use crate::error::{GridError, Result};
use crate::geom::{Point, Range};
use crate::movement::DiagonalMovement;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Parent index of a node with no predecessor.
pub const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// Per-cell search bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// Cost from the start.
    pub g: i32,
    /// Priority: `g` plus the heuristic estimate.
    pub f: i32,
    /// Flat index of the predecessor on the best known route.
    pub parent: usize,
    /// Queued in the open set.
    pub open: bool,
    /// Finalized.
    pub closed: bool,
    generation: u32,
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: NO_PARENT,
            open: false,
            closed: false,
            generation: 0,
        }
    }
}

impl SearchNode {
    fn fresh(generation: u32) -> Self {
        Self {
            generation,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// WeightedGrid
// ---------------------------------------------------------------------------

/// A rectangular grid of cell weights. A weight of [`BLOCKED`] is
/// impassable; any other weight is the cost of crossing the cell.
///
/// The shape and weights never change after construction. Only the
/// transient search state is mutable, and only through `&mut self`, so a
/// grid can never be searched by two callers at once.
#[derive(Debug, Clone)]
pub struct WeightedGrid {
    bounds: Range,
    width: usize,
    weights: Vec<u8>,
    walkable: usize,
    min_weight: Option<u8>,
    nodes: Vec<SearchNode>,
    generation: u32,
}

impl WeightedGrid {
    /// Create a grid from row-major weights.
    pub fn new(width: usize, height: usize, weights: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if weights.len() != width * height {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                found: weights.len(),
            });
        }
        let walkable = weights.iter().filter(|&&w| w != BLOCKED).count();
        let min_weight = weights.iter().copied().filter(|&w| w != BLOCKED).min();
        Ok(Self {
            bounds: Range::from_size(width as i32, height as i32),
            width,
            nodes: vec![SearchNode::default(); weights.len()],
            weights,
            walkable,
            min_weight,
            generation: 0,
        })
    }

    /// Create a grid where every cell has the same weight.
    pub fn filled(width: usize, height: usize, weight: u8) -> Result<Self> {
        Self::new(width, height, vec![weight; width * height])
    }

    /// Create a grid from a list of equally long rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyGrid);
        };
        let width = first.as_ref().len();
        let mut weights = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            weights.extend_from_slice(r);
        }
        Self::new(width, rows.len(), weights)
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Number of walkable cells, computed once at construction.
    #[inline]
    pub fn walkable_count(&self) -> usize {
        self.walkable
    }

    /// Cheapest walkable weight, or `None` when nothing is walkable.
    #[inline]
    pub fn min_walkable_weight(&self) -> Option<u8> {
        self.min_weight
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `(x, y)`.
    pub fn node(&self, x: i32, y: i32) -> Result<Cell> {
        self.cell(Point::new(x, y)).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| Cell::new(p, self.weights[i]))
    }

    /// The cell stored at flat index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> Cell {
        Cell::new(self.point(idx), self.weights[idx])
    }

    /// The weight at `p`, or `None` if out of bounds.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<u8> {
        self.index(p).map(|i| self.weights[i])
    }

    /// Whether `p` is inside the grid and not blocked.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.weight(p).is_some_and(|w| w != BLOCKED)
    }

    /// Row-major iterator over all walkable cells.
    pub fn walkable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != BLOCKED)
            .map(|(i, &w)| Cell::new(self.point(i), w))
    }

    /// Weights row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.weights.chunks(self.width)
    }

    /// Weights row by row with every cell on `path` replaced by `marker`.
    ///
    /// The grid itself is left untouched. Path cells outside the grid are
    /// skipped.
    pub fn burn_path(&self, path: &[Cell], marker: u16) -> Vec<Vec<u16>> {
        let mut overlay: Vec<Vec<u16>> = self
            .rows()
            .map(|row| row.iter().map(|&w| u16::from(w)).collect())
            .collect();
        for cell in path {
            if self.contains(cell.pos) {
                overlay[cell.pos.y as usize][cell.pos.x as usize] = marker;
            }
        }
        overlay
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// Walkable neighbours of `cell` reachable in one step under `movement`.
    ///
    /// Orthogonal neighbours come first (up, right, down, left), followed
    /// by the permitted diagonals (up-right, down-right, down-left, up-left).
    pub fn neighbors(&self, cell: Cell, movement: DiagonalMovement) -> Vec<Cell> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(cell.pos, movement, &mut buf);
        buf.into_iter()
            .filter_map(|p| self.cell(p))
            .collect()
    }

    /// Append the walkable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    pub fn neighbors_into(&self, p: Point, movement: DiagonalMovement, buf: &mut Vec<Point>) {
        let orth = p.neighbors_4();
        let [up, right, down, left] = orth.map(|q| self.is_walkable(q));
        for (q, ok) in orth.into_iter().zip([up, right, down, left]) {
            if ok {
                buf.push(q);
            }
        }
        if !movement.allows_diagonals() {
            return;
        }
        let [ur, dr, dl, ul] = p.diagonals();
        for (q, a, b) in [
            (ur, up, right),
            (dr, down, right),
            (dl, down, left),
            (ul, up, left),
        ] {
            if movement.permits(a, b) && self.is_walkable(q) {
                buf.push(q);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Transient search state
    // -----------------------------------------------------------------------

    /// Reset all transient search state.
    ///
    /// Runs in constant time except when the generation counter wraps, in
    /// which case every node is rewritten.
    pub fn cleanup(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            log::debug!("search generation wrapped, resetting {} nodes", self.nodes.len());
            self.nodes.fill(SearchNode::default());
        }
    }

    /// Search state of the node at `idx` for the current generation.
    #[inline]
    pub fn search_node(&self, idx: usize) -> SearchNode {
        let n = self.nodes[idx];
        if n.generation == self.generation {
            n
        } else {
            SearchNode::fresh(self.generation)
        }
    }

    /// Mutable search state of the node at `idx`. A node left over from an
    /// earlier generation is reset before it is handed out.
    #[inline]
    pub fn search_node_mut(&mut self, idx: usize) -> &mut SearchNode {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != generation {
            *n = SearchNode::fresh(generation);
        }
        n
    }
}
