use gridbench_core::{Cell, DiagonalMovement, WeightedGrid};

use crate::error::SearchError;
use crate::search::best_first;
use crate::traits::{SearchAlgorithm, SearchResult, ZeroHeuristic};

/// Uniform-cost (Dijkstra) search: best-first search with a zero
/// heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSearch {
    movement: DiagonalMovement,
}

impl DijkstraSearch {
    pub const NAME: &'static str = "Dijkstra";

    pub fn new(movement: DiagonalMovement) -> Self {
        Self { movement }
    }
}

impl SearchAlgorithm for DijkstraSearch {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn movement(&self) -> DiagonalMovement {
        self.movement
    }

    fn find_path(
        &self,
        start: Cell,
        end: Cell,
        grid: &mut WeightedGrid,
    ) -> Result<SearchResult, SearchError> {
        best_first(grid, start, end, self.movement, &ZeroHeuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::PathCostMode;

    #[test]
    fn walks_around_blocked_center() {
        let mut grid =
            WeightedGrid::from_rows(&[[1u8, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let start = grid.node(0, 0).unwrap();
        let end = grid.node(2, 2).unwrap();
        let result = DijkstraSearch::new(DiagonalMovement::IfAtMostOneObstacle)
            .find_path(start, end, &mut grid)
            .unwrap();
        assert_eq!(result.path.len(), 4);
        assert_eq!(result.path.first(), Some(&start));
        assert_eq!(result.path.last(), Some(&end));
        assert_eq!(result.cost(PathCostMode::Full), 3.0);
        assert_eq!(result.cost(PathCostMode::Legacy), 2.0);
    }

    #[test]
    fn only_when_no_obstacles_forbids_corner_cuts() {
        let mut grid =
            WeightedGrid::from_rows(&[[1u8, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        let start = grid.node(0, 0).unwrap();
        let end = grid.node(2, 2).unwrap();
        let result = DijkstraSearch::new(DiagonalMovement::OnlyWhenNoObstacles)
            .find_path(start, end, &mut grid)
            .unwrap();
        assert_eq!(result.path.len(), 5);
        assert_eq!(result.cost(PathCostMode::Full), 4.0);
    }

    #[test]
    fn explores_whole_cost_disc() {
        let mut grid = WeightedGrid::filled(5, 5, 1).unwrap();
        let start = grid.node(0, 0).unwrap();
        let end = grid.node(4, 4).unwrap();
        let result = DijkstraSearch::new(DiagonalMovement::Always)
            .find_path(start, end, &mut grid)
            .unwrap();
        assert_eq!(result.path.len(), 5);
        // The 16 cells closer than 4 steps are all finalized first.
        assert!(result.explored > 16);
        assert!(result.explored <= 25);
    }
}
