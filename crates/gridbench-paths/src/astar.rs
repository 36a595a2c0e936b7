use gridbench_core::{Cell, DiagonalMovement, WeightedGrid};

use crate::error::SearchError;
use crate::search::best_first;
use crate::traits::{GridDistance, SearchAlgorithm, SearchResult};

/// A* search guided by [`GridDistance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarSearch {
    movement: DiagonalMovement,
}

impl AStarSearch {
    pub const NAME: &'static str = "A-Star";

    pub fn new(movement: DiagonalMovement) -> Self {
        Self { movement }
    }
}

impl SearchAlgorithm for AStarSearch {
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
        best_first(grid, start, end, self.movement, &GridDistance::new(self.movement))
    }
}
