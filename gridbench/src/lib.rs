//! gridbench: benchmarks A* against Dijkstra on seeded terrain maps.
//!
//! A run loads each map, samples one set of random start/end pairs per
//! map, replays it against every algorithm, and exports time, straight-line
//! distance and path cost per trial as CSV.

pub mod config;
pub mod error;
pub mod harness;
pub mod maps;
pub mod runner;
pub mod sink;

pub use config::{AlgorithmKind, BenchConfig, MapSpec};
pub use error::{BenchError, Result};
pub use harness::{
    Clock, MAX_SAMPLING_ATTEMPTS, MonotonicClock, NO_PATH_COST, TrialHarness, TrialRecord,
    TrialSeries, sample_endpoints,
};
pub use maps::{DirMapSource, MapSource, generate_maps, map_path};
pub use runner::{AlgorithmSummary, BenchmarkRunner, MapReport};
pub use sink::{CsvDirSink, MemorySink, ResultSink, write_csv_line};
