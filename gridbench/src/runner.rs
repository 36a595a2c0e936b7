//! Benchmark orchestration across maps and algorithms.

use gridbench_core::WeightedGrid;
use gridbench_paths::{PathCostMode, SearchAlgorithm};
use rand::Rng;

use crate::error::{BenchError, Result};
use crate::harness::{TrialHarness, TrialSeries};
use crate::maps::MapSource;
use crate::sink::ResultSink;

/// Headline numbers for one algorithm on one map.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: String,
    pub trials: usize,
    pub found: usize,
    /// Mean search time in seconds.
    pub mean_time: f64,
}

impl AlgorithmSummary {
    fn from_series(algorithm: &str, series: &TrialSeries) -> Self {
        let trials = series.len();
        Self {
            algorithm: algorithm.to_owned(),
            trials,
            found: series.found(),
            mean_time: if trials == 0 {
                0.0
            } else {
                series.total_time() / trials as f64
            },
        }
    }
}

/// Outcome of benchmarking one map.
#[derive(Debug)]
pub struct MapReport {
    pub map_id: String,
    pub outcome: Result<Vec<AlgorithmSummary>>,
}

impl MapReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs trial batches and hands every series to a [`ResultSink`].
pub struct BenchmarkRunner<S, R> {
    sink: S,
    rng: R,
    cost_mode: PathCostMode,
}

impl<S: ResultSink, R: Rng> BenchmarkRunner<S, R> {
    pub fn new(sink: S, rng: R) -> Self {
        Self {
            sink,
            rng,
            cost_mode: PathCostMode::default(),
        }
    }

    pub fn with_cost_mode(mut self, cost_mode: PathCostMode) -> Self {
        self.cost_mode = cost_mode;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Benchmark every algorithm on one grid.
    ///
    /// One endpoint set is sampled per map and replayed for each
    /// algorithm. The first failure stops the map.
    pub fn run_map(
        &mut self,
        map_id: &str,
        grid: &mut WeightedGrid,
        algorithms: &[Box<dyn SearchAlgorithm>],
        trial_count: usize,
    ) -> Result<Vec<AlgorithmSummary>> {
        // Output is keyed by algorithm name.
        for (i, algo) in algorithms.iter().enumerate() {
            if algorithms[..i].iter().any(|a| a.name() == algo.name()) {
                return Err(BenchError::InvalidConfig(format!(
                    "algorithm name {} used twice",
                    algo.name()
                )));
            }
        }

        log::info!("calculating {trial_count} start/end points for map {map_id}");
        let harness = TrialHarness::sample(grid, trial_count, &mut self.rng)
            .map_err(|e| BenchError::Sampling {
                map_id: map_id.to_owned(),
                source: Box::new(e),
            })?
            .with_cost_mode(self.cost_mode);

        let mut summaries = Vec::with_capacity(algorithms.len());
        for algo in algorithms {
            let name = algo.name();
            let wrap = |e: BenchError| BenchError::Map {
                map_id: map_id.to_owned(),
                algorithm: name.to_owned(),
                source: Box::new(e),
            };
            let series = harness.run_trials(grid, algo.as_ref()).map_err(wrap)?;
            self.sink
                .write_series(map_id, name, &series)
                .map_err(wrap)?;
            summaries.push(AlgorithmSummary::from_series(name, &series));
        }
        Ok(summaries)
    }

    /// Benchmark each map in turn.
    ///
    /// A map that fails to load or run is logged and reported; the
    /// remaining maps still run.
    pub fn run(
        &mut self,
        source: &mut dyn MapSource,
        map_ids: &[String],
        algorithms: &[Box<dyn SearchAlgorithm>],
        trial_count: usize,
    ) -> Vec<MapReport> {
        map_ids
            .iter()
            .map(|map_id| {
                let outcome = source
                    .load(map_id)
                    .and_then(|mut grid| self.run_map(map_id, &mut grid, algorithms, trial_count));
                if let Err(e) = &outcome {
                    log::warn!("map {map_id} failed: {e}");
                }
                MapReport {
                    map_id: map_id.clone(),
                    outcome,
                }
            })
            .collect()
    }
}
