use gridbench_core::GridError;
use gridbench_paths::SearchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("grid has {walkable} walkable cell(s), need at least 2 distinct ones")]
    InsufficientWalkableCells { walkable: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("trial {index} failed: {source}")]
    Trial { index: usize, source: SearchError },

    #[error("map {map_id}: endpoint sampling failed: {source}")]
    Sampling {
        map_id: String,
        source: Box<BenchError>,
    },

    #[error("map {map_id}, {algorithm}: {source}")]
    Map {
        map_id: String,
        algorithm: String,
        source: Box<BenchError>,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
