//! Best-first search core shared by A* and Dijkstra.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridbench_core::{Cell, DiagonalMovement, NO_PARENT, WeightedGrid};

use crate::cost::step_cost_halves;
use crate::error::{Endpoint, EndpointIssue, SearchError};
use crate::traits::{Heuristic, SearchResult};

/// Open-set entry, ordered by `f` and then by insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among
        // equal f the earliest pushed entry wins.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn endpoint_index(
    grid: &WeightedGrid,
    cell: Cell,
    endpoint: Endpoint,
) -> Result<usize, SearchError> {
    let invalid = |issue| SearchError::InvalidEndpoint {
        endpoint,
        pos: cell.pos,
        issue,
    };
    let idx = grid
        .index(cell.pos)
        .ok_or_else(|| invalid(EndpointIssue::OutOfBounds))?;
    if !grid.cell_at(idx).walkable() {
        return Err(invalid(EndpointIssue::Blocked));
    }
    Ok(idx)
}

/// Cheapest path from `start` to `end`, expanding cells in order of
/// cost-so-far plus `heuristic`.
///
/// Resets the grid's transient state before starting. Stale open-set
/// entries are skipped lazily instead of being re-prioritized, which keeps
/// the search at O(E log V).
pub fn best_first<H: Heuristic + ?Sized>(
    grid: &mut WeightedGrid,
    start: Cell,
    end: Cell,
    movement: DiagonalMovement,
    heuristic: &H,
) -> Result<SearchResult, SearchError> {
    let start_idx = endpoint_index(grid, start, Endpoint::Start)?;
    let goal_idx = endpoint_index(grid, end, Endpoint::End)?;
    if start_idx == goal_idx {
        return Err(SearchError::InvalidEndpoint {
            endpoint: Endpoint::End,
            pos: end.pos,
            issue: EndpointIssue::SameAsStart,
        });
    }

    grid.cleanup();

    let f0 = heuristic.estimate(grid, start.pos, end.pos);
    {
        let node = grid.search_node_mut(start_idx);
        node.g = 0;
        node.f = f0;
        node.open = true;
    }

    let mut open = BinaryHeap::new();
    let mut seq = 0u64;
    open.push(NodeRef {
        idx: start_idx,
        f: f0,
        seq,
    });

    let mut nbuf = Vec::with_capacity(8);
    let mut explored = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;
        let node = grid.search_node(ci);
        // Skip stale entries: the first pop of a cell carries its best f.
        if node.closed {
            continue;
        }
        {
            let n = grid.search_node_mut(ci);
            n.open = false;
            n.closed = true;
        }
        explored += 1;

        if ci == goal_idx {
            break 'search true;
        }

        let current_cell = grid.cell_at(ci);
        nbuf.clear();
        grid.neighbors_into(current_cell.pos, movement, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            let neighbor = grid.search_node(ni);
            if neighbor.closed {
                continue;
            }
            let tentative_g =
                node.g + step_cost_halves(current_cell.weight, grid.cell_at(ni).weight);
            if tentative_g >= neighbor.g {
                continue;
            }

            let f = tentative_g + heuristic.estimate(grid, np, end.pos);
            let n = grid.search_node_mut(ni);
            n.g = tentative_g;
            n.f = f;
            n.parent = ci;
            n.open = true;

            seq += 1;
            open.push(NodeRef { idx: ni, f, seq });
        }
    };

    log::trace!(
        "search {} -> {}: found={found} explored={explored}",
        start.pos,
        end.pos
    );

    if !found {
        return Ok(SearchResult {
            path: Vec::new(),
            explored,
        });
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(grid.cell_at(ci));
        ci = grid.search_node(ci).parent;
    }
    path.reverse();
    Ok(SearchResult { path, explored })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{GridDistance, ZeroHeuristic};
    use gridbench_core::Point;

    fn cell(grid: &WeightedGrid, x: i32, y: i32) -> Cell {
        grid.node(x, y).unwrap()
    }

    #[test]
    fn node_ref_pops_lowest_f_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 5, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 3, seq: 1 });
        heap.push(NodeRef { idx: 2, f: 3, seq: 2 });
        heap.push(NodeRef { idx: 3, f: 4, seq: 3 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|n| n.idx).collect();
        assert_eq!(order, [1, 2, 3, 0]);
    }

    #[test]
    fn rejects_bad_endpoints() {
        let mut grid = WeightedGrid::from_rows(&[[1u8, 0], [1, 1]]).unwrap();
        let open = cell(&grid, 0, 0);
        let wall = cell(&grid, 1, 0);
        let outside = Cell::new(Point::new(5, 5), 1);
        let m = DiagonalMovement::Always;

        let err = best_first(&mut grid, wall, open, m, &ZeroHeuristic).unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                pos: wall.pos,
                issue: EndpointIssue::Blocked
            }
        );
        let err = best_first(&mut grid, open, outside, m, &ZeroHeuristic).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidEndpoint {
                endpoint: Endpoint::End,
                issue: EndpointIssue::OutOfBounds,
                ..
            }
        ));
        let err = best_first(&mut grid, open, open, m, &ZeroHeuristic).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidEndpoint {
                issue: EndpointIssue::SameAsStart,
                ..
            }
        ));
    }

    #[test]
    fn blocked_weight_on_grid_wins_over_cell_copy() {
        let mut grid = WeightedGrid::from_rows(&[[1u8, 0, 1]]).unwrap();
        let forged = Cell::new(Point::new(1, 0), 5);
        let start = cell(&grid, 0, 0);
        assert!(best_first(&mut grid, start, forged, DiagonalMovement::Always, &ZeroHeuristic).is_err());
    }

    #[test]
    fn unreachable_end_is_empty_path() {
        let mut grid = WeightedGrid::from_rows(&[[1u8, 0, 1], [1, 0, 1]]).unwrap();
        let (s, e) = (cell(&grid, 0, 0), cell(&grid, 2, 1));
        let result =
            best_first(&mut grid, s, e, DiagonalMovement::Always, &ZeroHeuristic).unwrap();
        assert!(!result.is_found());
        assert_eq!(result.explored, 2);
    }

    #[test]
    fn prefers_cheap_detour_over_expensive_crossing() {
        // The direct route crosses two 9s; going around costs less.
        let mut grid = WeightedGrid::from_rows(&[
            [1u8, 9, 9, 1],
            [1, 1, 1, 1],
        ])
        .unwrap();
        let (s, e) = (cell(&grid, 0, 0), cell(&grid, 3, 0));
        let heuristics: [&dyn Heuristic; 2] =
            [&ZeroHeuristic, &GridDistance::new(DiagonalMovement::Never)];
        for h in heuristics {
            let result = best_first(&mut grid, s, e, DiagonalMovement::Never, h).unwrap();
            let pos: Vec<_> = result.path.iter().map(|c| c.pos).collect();
            assert_eq!(
                pos,
                [
                    Point::new(0, 0),
                    Point::new(0, 1),
                    Point::new(1, 1),
                    Point::new(2, 1),
                    Point::new(3, 1),
                    Point::new(3, 0),
                ]
            );
        }
    }

    #[test]
    fn ties_resolve_the_same_way_every_time() {
        let mut grid = WeightedGrid::filled(6, 6, 2).unwrap();
        let (s, e) = (cell(&grid, 0, 0), cell(&grid, 5, 3));
        let first = best_first(&mut grid, s, e, DiagonalMovement::Always, &ZeroHeuristic).unwrap();
        for _ in 0..5 {
            let again =
                best_first(&mut grid, s, e, DiagonalMovement::Always, &ZeroHeuristic).unwrap();
            assert_eq!(again, first);
        }
    }
}
