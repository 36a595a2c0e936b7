//! Shortest-path search over weighted grids.
//!
//! Two searches share one best-first core ([`best_first`]):
//!
//! - **A\*** ([`AStarSearch`]) guided by an admissible grid-distance estimate
//! - **Dijkstra** ([`DijkstraSearch`]), the same search with a zero estimate
//!
//! Both score a step between adjacent cells as the average of their
//! weights, the same model [`path_cost`] uses to score a finished path,
//! so both always return paths of the same, minimal cost.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`SearchAlgorithm`] | `find_path(start, end, grid)` capability benchmarks run |
//! | [`Heuristic`] | remaining-cost estimate plugged into [`best_first`] |

mod astar;
mod cost;
mod dijkstra;
mod distance;
mod error;
mod search;
mod traits;

pub use astar::AStarSearch;
pub use cost::{PathCostMode, UnknownCostMode, path_cost, step_cost, step_cost_halves};
pub use dijkstra::DijkstraSearch;
pub use distance::{chebyshev, manhattan, min_steps};
pub use error::{Endpoint, EndpointIssue, SearchError};
pub use search::best_first;
pub use traits::{GridDistance, Heuristic, SearchAlgorithm, SearchResult, ZeroHeuristic};
